use super::models::{EligibilityRow, LoanRow, PartnerRow, RuleRow};
use crate::pagination::{fetch_all_pages, verify_no_truncation};
use async_trait::async_trait;
use medialoan_core::{Eligibility, LoanRecord, Partner, PartnerRepository, Rule};
use sqlx::{query_as, SqlitePool};

pub struct SqlitePartnerRepository {
    pool: SqlitePool,
}

impl SqlitePartnerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for SqlitePartnerRepository {
    async fn get_partners(&self) -> anyhow::Result<Vec<Partner>> {
        let rows: Vec<PartnerRow> = fetch_all_pages(|limit, offset| {
            let pool = self.pool.clone();
            async move {
                query_as::<_, PartnerRow>(
                    "SELECT person_id, name, office, latitude, longitude
                     FROM media_partners
                     ORDER BY person_id
                     LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&pool)
                .await
            }
        })
        .await?;

        Ok(rows.into_iter().map(PartnerRow::into_domain).collect())
    }

    async fn get_eligibility(&self) -> anyhow::Result<Vec<Eligibility>> {
        let rows: Vec<EligibilityRow> = fetch_all_pages(|limit, offset| {
            let pool = self.pool.clone();
            async move {
                query_as::<_, EligibilityRow>(
                    "SELECT person_id, make, rank
                     FROM approved_makes
                     ORDER BY person_id, make
                     LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&pool)
                .await
            }
        })
        .await?;

        Ok(rows.into_iter().map(EligibilityRow::into_domain).collect())
    }

    async fn get_rules(&self) -> anyhow::Result<Vec<Rule>> {
        let rows: Vec<RuleRow> = query_as::<_, RuleRow>(
            "SELECT make, rank, loan_cap_per_year, cooldown_period_days
             FROM rules
             ORDER BY make, rank",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::StorageError::from)?;

        verify_no_truncation(rows.len(), "rules")?;

        Ok(rows.into_iter().map(RuleRow::into_domain).collect())
    }

    async fn get_loan_history(&self) -> anyhow::Result<Vec<LoanRecord>> {
        let rows: Vec<LoanRow> = fetch_all_pages(|limit, offset| {
            let pool = self.pool.clone();
            async move {
                query_as::<_, LoanRow>(
                    "SELECT activity_id, person_id, make, model, start_date, end_date, clips_received
                     FROM loan_history
                     ORDER BY activity_id
                     LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&pool)
                .await
            }
        })
        .await?;

        let mut loans = Vec::with_capacity(rows.len());
        for row in rows {
            loans.push(row.into_domain()?);
        }
        Ok(loans)
    }
}
