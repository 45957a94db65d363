use super::rank::Rank;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ===== Input records (read-only, owned by the store) =====

/// A fleet vehicle parked at a regional office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub office: String,
    pub in_service_date: Option<NaiveDate>,
    pub expected_turn_in_date: Option<NaiveDate>,
}

/// A media outlet person who may receive a loaner vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub person_id: i64,
    pub name: String,
    pub office: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Approval of a partner for a make, with a quality tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    pub person_id: i64,
    pub make: String,
    pub rank: Rank,
}

/// Per (make, rank) policy knobs. Both values are optional; absent caps
/// fall through to the rank ladder, absent cooldowns to the configured
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub make: String,
    pub rank: Rank,
    pub loan_cap_per_year: Option<u32>,
    pub cooldown_period_days: Option<u32>,
}

/// A completed (or historical) loan, the append-only audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub activity_id: String,
    pub person_id: i64,
    pub make: String,
    pub model: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-form clips column from the upstream report; see
    /// `etl::publication::normalize_clips`.
    pub clips_received: Option<String>,
}

/// An activity currently blocking a VIN (service, prior loan, transport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentActivity {
    pub activity_id: String,
    pub vin: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub activity_type: String,
}

/// Office loan-start slots. A dated row sets that day's slots; a dateless
/// row is the office-wide default for every day (the legacy
/// drivers_per_day shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpsCapacity {
    pub office: String,
    pub date: Option<NaiveDate>,
    pub slots: u32,
}

// ===== Pipeline artifacts (produced and consumed within one run) =====

/// One cell of the availability grid: a VIN on one day of the target week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub vin: String,
    pub date: NaiveDate,
    pub market: String,
    pub make: String,
    pub model: String,
    pub available: bool,
}

/// Cooldown state for one observed (partner, make, model) grain.
/// Rows with `model = None` block at make granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooldownFlag {
    pub person_id: i64,
    pub make: String,
    pub model: Option<String>,
    pub cooldown_ok: bool,
    pub cooldown_until: Option<NaiveDate>,
}

/// Rolling 24-month publication behavior for a (partner, make) grain.
///
/// `publication_rate` is `None` when nothing was observed - unknown is
/// never rendered as a zero rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationStat {
    pub person_id: i64,
    pub make: String,
    pub loans_total_24m: u32,
    pub loans_observed_24m: u32,
    pub publications_observed_24m: u32,
    pub publication_rate: Option<f64>,
    pub coverage: f64,
    pub supported: bool,
}

/// A feasible (vin, partner) pairing for the week; immutable within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub vin: String,
    pub person_id: i64,
    pub market: String,
    pub make: String,
    pub model: String,
    pub week_start: NaiveDate,
    pub available_days: u32,
    pub cooldown_ok: bool,
    pub publication_rate: Option<f64>,
    pub supported: bool,
    pub coverage: f64,
    pub rank: Rank,
}

/// A candidate plus its deterministic integer score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: i64,
}

/// A committed candidate with a concrete start day; the terminal output.
/// `end_day` is inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub vin: String,
    pub person_id: i64,
    pub start_day: NaiveDate,
    pub end_day: NaiveDate,
    pub make: String,
    pub model: String,
    pub office: String,
    pub score: i64,
    pub week_start: NaiveDate,
}
