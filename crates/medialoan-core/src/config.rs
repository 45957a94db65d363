use crate::solver::tier_caps::TierCapFallback;

/// Options recognized by a scheduling run. Defaults mirror production
/// behavior; the enable_* toggles exist for diagnostics and relax one
/// admission check each.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Minimum weekly availability for a VIN to enter candidates.
    pub min_available_days: u32,
    /// Length of each loan window, in days.
    pub loan_length_days: u32,
    /// Per-partner weekly assignment cap.
    pub max_per_partner_per_week: u32,
    /// Fallback cooldown when no rule supplies one.
    pub default_cooldown_days: u32,
    /// Per-rank annual caps when no explicit rule matches.
    pub tier_cap_fallback: TierCapFallback,
    pub enable_tier_caps: bool,
    pub enable_cooldown: bool,
    pub enable_capacity: bool,
    /// Admit partners lacking an eligibility row at default rank C.
    pub admit_without_eligibility: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_available_days: 5,
            loan_length_days: 7,
            max_per_partner_per_week: 1,
            default_cooldown_days: 60,
            tier_cap_fallback: TierCapFallback::default(),
            enable_tier_caps: true,
            enable_cooldown: true,
            enable_capacity: true,
            admit_without_eligibility: false,
        }
    }
}
