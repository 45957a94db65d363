/// Tier-cap resolution: annual loan caps per (partner, make), from
/// explicit rules with a rank-keyed fallback ladder, plus the rolling
/// 12-month usage count they are checked against.
use crate::domain::{Candidate, LoanRecord, Rank, Rule};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Sentinel for "no annual limit" (A+ partners); far above any weekly
/// schedule's reach.
pub const UNLIMITED_CAP: u32 = 9999;

/// Per-rank fallback caps applied when no explicit rule matches.
///
/// `unranked` covers Pending and unrecognized ranks; it defaults to 0 and
/// can be raised to unblock new partners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCapFallback {
    pub a_plus: u32,
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub unranked: u32,
}

impl Default for TierCapFallback {
    fn default() -> Self {
        Self {
            a_plus: UNLIMITED_CAP,
            a: 6,
            b: 2,
            c: 0,
            unranked: 0,
        }
    }
}

impl TierCapFallback {
    fn cap_for(&self, rank: Rank) -> u32 {
        match rank {
            Rank::APlus => self.a_plus,
            Rank::A => self.a,
            Rank::B => self.b,
            Rank::C => self.c,
            Rank::Pending | Rank::Unranked => self.unranked,
        }
    }
}

/// Resolve the annual cap for a (make, rank) pair: explicit rule first,
/// fallback ladder otherwise.
pub fn resolve_annual_cap(
    make: &str,
    rank: Rank,
    rules: &[Rule],
    fallback: &TierCapFallback,
) -> u32 {
    rules
        .iter()
        .find(|r| r.make == make && r.rank == rank)
        .and_then(|r| r.loan_cap_per_year)
        .unwrap_or_else(|| fallback.cap_for(rank))
}

/// Loans consumed by a partner for a make in the 12 months before
/// `week_start`: history rows whose end_date falls in
/// `[week_start - 365d, week_start)`. Loans still in progress at
/// `week_start` are not counted.
pub fn loans_12m(
    loan_history: &[LoanRecord],
    person_id: i64,
    make: &str,
    week_start: NaiveDate,
) -> u32 {
    let window_start = week_start - Days::new(365);
    loan_history
        .iter()
        .filter(|loan| {
            loan.person_id == person_id
                && loan.make == make
                && loan.end_date >= window_start
                && loan.end_date < week_start
        })
        .count() as u32
}

/// Remaining cap per distinct (partner, make) among the given candidates:
/// `cap - loans_12m`, saturating at 0.
pub fn build_cap_remaining(
    candidates: &[Candidate],
    rules: &[Rule],
    loan_history: &[LoanRecord],
    week_start: NaiveDate,
    fallback: &TierCapFallback,
) -> HashMap<(i64, String), u32> {
    let mut remaining = HashMap::new();
    for candidate in candidates {
        let key = (candidate.person_id, candidate.make.clone());
        remaining.entry(key).or_insert_with(|| {
            let cap = resolve_annual_cap(&candidate.make, candidate.rank, rules, fallback);
            let used = loans_12m(
                loan_history,
                candidate.person_id,
                &candidate.make,
                week_start,
            );
            cap.saturating_sub(used)
        });
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{candidate, date, loan, rule_cap};

    const WEEK: &str = "2025-09-22";

    #[test]
    fn explicit_rule_beats_ladder() {
        let rules = vec![rule_cap("Volkswagen", Rank::APlus, 100)];
        let fallback = TierCapFallback::default();

        assert_eq!(
            resolve_annual_cap("Volkswagen", Rank::APlus, &rules, &fallback),
            100
        );
    }

    #[test]
    fn ladder_applies_without_a_matching_rule() {
        let rules = vec![rule_cap("Volkswagen", Rank::APlus, 100)];
        let fallback = TierCapFallback::default();

        assert_eq!(
            resolve_annual_cap("Hyundai", Rank::APlus, &rules, &fallback),
            UNLIMITED_CAP
        );
        assert_eq!(resolve_annual_cap("Hyundai", Rank::A, &rules, &fallback), 6);
        assert_eq!(resolve_annual_cap("Hyundai", Rank::B, &rules, &fallback), 2);
        assert_eq!(resolve_annual_cap("Hyundai", Rank::C, &rules, &fallback), 0);
        assert_eq!(
            resolve_annual_cap("Mazda", Rank::Pending, &rules, &fallback),
            0
        );
        assert_eq!(
            resolve_annual_cap("Mazda", Rank::Unranked, &rules, &fallback),
            0
        );
    }

    #[test]
    fn unranked_cap_is_configurable() {
        let fallback = TierCapFallback {
            unranked: 1,
            ..TierCapFallback::default()
        };

        assert_eq!(resolve_annual_cap("Mazda", Rank::Pending, &[], &fallback), 1);
    }

    #[test]
    fn rule_without_cap_falls_through_to_ladder() {
        // A rule row that only sets cooldown_period_days carries no cap.
        let rules = vec![crate::domain::Rule {
            make: "Toyota".to_string(),
            rank: Rank::B,
            loan_cap_per_year: None,
            cooldown_period_days: Some(30),
        }];

        assert_eq!(
            resolve_annual_cap("Toyota", Rank::B, &rules, &TierCapFallback::default()),
            2
        );
    }

    #[test]
    fn loans_12m_window_boundaries() {
        let history = vec![
            // Exactly 365 days before week_start: included.
            loan("A1", 1, "Audi", None, "2024-09-22", None),
            // Day before the window: excluded.
            loan("A2", 1, "Audi", None, "2024-09-21", None),
            // Ends on week_start: not yet consumed, excluded.
            loan("A3", 1, "Audi", None, "2025-09-22", None),
            // Mid-window: included.
            loan("A4", 1, "Audi", None, "2025-03-01", None),
            // Other partner / other make: excluded.
            loan("A5", 2, "Audi", None, "2025-03-01", None),
            loan("A6", 1, "Volvo", None, "2025-03-01", None),
        ];

        assert_eq!(loans_12m(&history, 1, "Audi", date(WEEK)), 2);
    }

    #[test]
    fn cap_remaining_subtracts_usage_and_saturates() {
        let mut c = candidate("V1", 1, "Audi", "Q5", date(WEEK));
        c.rank = Rank::B;
        let history = vec![
            loan("A1", 1, "Audi", None, "2025-03-01", None),
            loan("A2", 1, "Audi", None, "2025-04-01", None),
            loan("A3", 1, "Audi", None, "2025-05-01", None),
        ];

        let remaining = build_cap_remaining(
            &[c],
            &[],
            &history,
            date(WEEK),
            &TierCapFallback::default(),
        );

        // Rank B ladder cap 2, three loans already consumed.
        assert_eq!(remaining[&(1, "Audi".to_string())], 0);
    }
}
