use crate::domain::{Eligibility, LoanRecord, Partner, Rule};
use async_trait::async_trait;

/// Read-only provider of partner-side inputs: partners, eligibility,
/// policy rules, and the loan audit trail.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// All media partners, across offices. Geography is a scoring concern,
    /// not a filter.
    async fn get_partners(&self) -> anyhow::Result<Vec<Partner>>;

    /// The full approved_makes table.
    async fn get_eligibility(&self) -> anyhow::Result<Vec<Eligibility>>;

    /// Per (make, rank) cap and cooldown rules.
    async fn get_rules(&self) -> anyhow::Result<Vec<Rule>>;

    /// The append-only loan history.
    async fn get_loan_history(&self) -> anyhow::Result<Vec<LoanRecord>>;
}
