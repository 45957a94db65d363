/// Publication statistics over a rolling window.
///
/// The null-vs-zero distinction is load-bearing throughout: a grain with
/// no observed clips data has an unknown rate, not a 0% rate, and the UI
/// upstream renders it as "insufficient data".
use crate::domain::{LoanRecord, PublicationStat};
use chrono::{Months, NaiveDate};
use std::collections::HashMap;

pub const DEFAULT_WINDOW_MONTHS: u32 = 24;
pub const DEFAULT_MIN_OBSERVED: u32 = 3;

/// Normalize the free-form clips_received column to published / not
/// published / unknown.
///
/// Textual true/yes and false/no are explicit; empty, none, null and nan
/// are unknown; any numeric value parses, with non-zero meaning published.
/// Unrecognized text is unknown, never a zero.
pub fn normalize_clips(raw: Option<&str>) -> Option<bool> {
    let text = raw?.trim().to_ascii_lowercase();
    match text.as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        "" | "none" | "null" | "nan" => None,
        other => other.parse::<f64>().ok().map(|v| v != 0.0),
    }
}

/// Compute per (person_id, make) publication stats over the
/// `[as_of - window_months, as_of]` window, keyed on loan end dates.
pub fn compute_publication_rate_24m(
    loan_history: &[LoanRecord],
    as_of: NaiveDate,
    window_months: u32,
    min_observed: u32,
) -> Vec<PublicationStat> {
    let window_start = as_of - Months::new(window_months);

    let mut grains: HashMap<(i64, &str), (u32, u32, u32)> = HashMap::new();
    for loan in loan_history {
        if loan.end_date < window_start || loan.end_date > as_of {
            continue;
        }
        let entry = grains.entry((loan.person_id, loan.make.as_str())).or_default();
        entry.0 += 1;
        match normalize_clips(loan.clips_received.as_deref()) {
            Some(published) => {
                entry.1 += 1;
                if published {
                    entry.2 += 1;
                }
            }
            None => {}
        }
    }

    let mut stats: Vec<PublicationStat> = grains
        .into_iter()
        .map(|((person_id, make), (total, observed, published))| PublicationStat {
            person_id,
            make: make.to_string(),
            loans_total_24m: total,
            loans_observed_24m: observed,
            publications_observed_24m: published,
            publication_rate: (observed > 0).then(|| f64::from(published) / f64::from(observed)),
            coverage: if total > 0 {
                f64::from(observed) / f64::from(total)
            } else {
                0.0
            },
            supported: observed >= min_observed,
        })
        .collect();

    stats.sort_by(|a, b| (a.person_id, &a.make).cmp(&(b.person_id, &b.make)));
    stats
}
