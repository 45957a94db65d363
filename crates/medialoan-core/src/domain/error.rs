use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid {field} date: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
}
