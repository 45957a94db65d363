/// Database row types for the partner-side tables.
use crate::error::StorageError;
use medialoan_core::domain::parse_date_lenient;
use medialoan_core::{Eligibility, LoanRecord, Partner, Rank, Rule};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PartnerRow {
    pub person_id: i64,
    pub name: String,
    pub office: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PartnerRow {
    pub fn into_domain(self) -> Partner {
        Partner {
            person_id: self.person_id,
            name: self.name,
            office: self.office,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct EligibilityRow {
    pub person_id: i64,
    pub make: String,
    pub rank: String,
}

impl EligibilityRow {
    pub fn into_domain(self) -> Eligibility {
        Eligibility {
            person_id: self.person_id,
            make: self.make,
            rank: Rank::parse(&self.rank),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct RuleRow {
    pub make: String,
    pub rank: String,
    pub loan_cap_per_year: Option<i64>,
    pub cooldown_period_days: Option<i64>,
}

impl RuleRow {
    pub fn into_domain(self) -> Rule {
        Rule {
            make: self.make,
            rank: Rank::parse(&self.rank),
            loan_cap_per_year: self.loan_cap_per_year.and_then(|v| u32::try_from(v).ok()),
            cooldown_period_days: self
                .cooldown_period_days
                .and_then(|v| u32::try_from(v).ok()),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct LoanRow {
    pub activity_id: String,
    pub person_id: i64,
    pub make: String,
    pub model: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub clips_received: Option<String>,
}

impl LoanRow {
    /// Loan dates are required: cooldown, publication and tier-cap
    /// windows are all keyed on them, so an unparseable one fails the
    /// run rather than silently skewing every downstream count.
    pub fn into_domain(self) -> Result<LoanRecord, StorageError> {
        let parse = |field: &str, raw: &str| {
            parse_date_lenient(raw).ok_or_else(|| StorageError::BadRow {
                table: "loan_history",
                reason: format!(
                    "{field} {raw:?} is not a date (activity {})",
                    self.activity_id
                ),
            })
        };
        let start_date = parse("start_date", &self.start_date)?;
        let end_date = parse("end_date", &self.end_date)?;
        drop(parse);

        Ok(LoanRecord {
            activity_id: self.activity_id,
            person_id: self.person_id,
            make: self.make,
            model: self.model,
            start_date,
            end_date,
            clips_received: self.clips_received,
        })
    }
}
