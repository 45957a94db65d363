use super::error::ScheduleError;
use chrono::{Days, NaiveDate};

/// Lenient ISO 8601 date parsing for free-form report columns.
///
/// Tolerates surrounding whitespace and trailing datetime suffixes
/// ("2025-09-22T00:00:00" parses as 2025-09-22). Returns `None` for
/// anything unparseable; callers drop the affected constraint, not the row.
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Strict parsing for dates the pipeline cannot run without (week_start,
/// loan_history end dates). Failure here fails the run.
pub fn parse_date_required(field: &'static str, raw: &str) -> Result<NaiveDate, ScheduleError> {
    parse_date_lenient(raw).ok_or_else(|| ScheduleError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

/// The seven calendar days of the target week.
pub fn week_days(week_start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| week_start + Days::new(i as u64))
}
