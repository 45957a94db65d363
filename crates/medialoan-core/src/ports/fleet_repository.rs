use crate::domain::{CurrentActivity, OpsCapacity, Vehicle};
use async_trait::async_trait;

/// Read-only provider of fleet-side inputs: the vehicle calendar and
/// office capacity. Implementations must accumulate every page of a bulk
/// read before returning; partial reads are a storage-layer error.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// All vehicles parked at the given office.
    async fn get_vehicles(&self, office: &str) -> anyhow::Result<Vec<Vehicle>>;

    /// Activities currently blocking availability windows, fleet-wide.
    async fn get_current_activity(&self) -> anyhow::Result<Vec<CurrentActivity>>;

    /// Loan-start slots for the given office (dated rows and/or the
    /// dateless office default).
    async fn get_ops_capacity(&self, office: &str) -> anyhow::Result<Vec<OpsCapacity>>;
}
