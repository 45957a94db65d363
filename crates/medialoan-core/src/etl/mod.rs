pub mod availability;
pub mod cooldown;
pub mod publication;

pub use availability::build_availability_grid;
pub use cooldown::compute_cooldown_flags;
pub use publication::{
    compute_publication_rate_24m, normalize_clips, DEFAULT_MIN_OBSERVED, DEFAULT_WINDOW_MONTHS,
};
