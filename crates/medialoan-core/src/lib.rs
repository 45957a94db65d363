pub mod config;
pub mod domain;
pub mod etl;
pub mod ports;
pub mod services;
pub mod solver;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types
pub use domain::{
    Assignment,
    AvailabilityDay,
    Candidate,
    CooldownFlag,
    CurrentActivity,
    Eligibility,
    LoanRecord,
    OpsCapacity,
    Partner,
    PublicationStat,
    Rank,
    Rule,
    ScheduleError,
    ScoredCandidate,
    Vehicle,
};

pub use config::SchedulerConfig;

pub use ports::{FleetRepository, PartnerRepository};

pub use etl::{
    build_availability_grid, compute_cooldown_flags, compute_publication_rate_24m,
    normalize_clips, DEFAULT_MIN_OBSERVED, DEFAULT_WINDOW_MONTHS,
};

pub use solver::{
    build_weekly_candidates, compute_candidate_scores, generate_week_schedule, loans_12m,
    resolve_annual_cap, CapacityLedger, TierCapFallback, GEO_BONUS, HISTORY_BONUS_MAX,
    UNLIMITED_CAP,
};

pub use services::SchedulerService;
