use super::models::{ActivityRow, OpsCapacityRow, VehicleRow};
use crate::pagination::{fetch_all_pages, verify_no_truncation};
use async_trait::async_trait;
use medialoan_core::{CurrentActivity, FleetRepository, OpsCapacity, Vehicle};
use sqlx::{query_as, SqlitePool};

pub struct SqliteFleetRepository {
    pool: SqlitePool,
}

impl SqliteFleetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FleetRepository for SqliteFleetRepository {
    async fn get_vehicles(&self, office: &str) -> anyhow::Result<Vec<Vehicle>> {
        let rows: Vec<VehicleRow> = fetch_all_pages(|limit, offset| {
            let pool = self.pool.clone();
            let office = office.to_string();
            async move {
                query_as::<_, VehicleRow>(
                    "SELECT vin, make, model, office, in_service_date, expected_turn_in_date
                     FROM vehicles
                     WHERE office = ?
                     ORDER BY vin
                     LIMIT ? OFFSET ?",
                )
                .bind(office)
                .bind(limit)
                .bind(offset)
                .fetch_all(&pool)
                .await
            }
        })
        .await?;

        Ok(rows.into_iter().map(VehicleRow::into_domain).collect())
    }

    async fn get_current_activity(&self) -> anyhow::Result<Vec<CurrentActivity>> {
        let rows: Vec<ActivityRow> = fetch_all_pages(|limit, offset| {
            let pool = self.pool.clone();
            async move {
                query_as::<_, ActivityRow>(
                    "SELECT activity_id, vin, start_date, end_date, activity_type
                     FROM current_activity
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

        Ok(rows.into_iter().map(ActivityRow::into_domain).collect())
    }

    async fn get_ops_capacity(&self, office: &str) -> anyhow::Result<Vec<OpsCapacity>> {
        let rows: Vec<OpsCapacityRow> = query_as::<_, OpsCapacityRow>(
            "SELECT office, date, slots, drivers_per_day
             FROM ops_capacity
             WHERE office = ?
             ORDER BY date",
        )
        .bind(office)
        .fetch_all(&self.pool)
        .await
        .map_err(crate::StorageError::from)?;

        verify_no_truncation(rows.len(), "ops_capacity")?;

        Ok(rows
            .into_iter()
            .filter_map(OpsCapacityRow::into_domain)
            .collect())
    }
}
