pub mod candidates;
pub mod capacity;
pub mod greedy;
pub mod scoring;
pub mod tier_caps;

pub use candidates::build_weekly_candidates;
pub use capacity::CapacityLedger;
pub use greedy::generate_week_schedule;
pub use scoring::{compute_candidate_scores, GEO_BONUS, HISTORY_BONUS_MAX};
pub use tier_caps::{loans_12m, resolve_annual_cap, TierCapFallback, UNLIMITED_CAP};
