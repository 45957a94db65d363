/// Cooldown evaluator.
///
/// A prior loan blocks new pairings of the same partner with the same
/// model (not the whole make) until `end_date + cooldown_period_days`.
/// Historical rows with no model recorded block at make granularity.
use crate::domain::{CooldownFlag, LoanRecord, Rule};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Compute cooldown flags as of `week_start`, one row per observed
/// `(person_id, make, model?)` grain.
///
/// The cooldown length for a loan comes from the make's rule when any rule
/// row for that make carries `cooldown_period_days` (the smallest such
/// value wins, so the result does not depend on rule row order), otherwise
/// `default_days`. Grains with no history are simply absent; downstream
/// treats missing grains as in the clear.
pub fn compute_cooldown_flags(
    loan_history: &[LoanRecord],
    rules: &[Rule],
    week_start: NaiveDate,
    default_days: u32,
) -> Vec<CooldownFlag> {
    let mut cooldown_by_make: HashMap<&str, u32> = HashMap::new();
    for rule in rules {
        if let Some(days) = rule.cooldown_period_days {
            cooldown_by_make
                .entry(rule.make.as_str())
                .and_modify(|d| *d = (*d).min(days))
                .or_insert(days);
        }
    }

    // Latest loan end per grain; later loans fully subsume earlier ones.
    let mut latest_end: HashMap<(i64, &str, Option<&str>), NaiveDate> = HashMap::new();
    for loan in loan_history {
        let key = (loan.person_id, loan.make.as_str(), loan.model.as_deref());
        latest_end
            .entry(key)
            .and_modify(|end| *end = (*end).max(loan.end_date))
            .or_insert(loan.end_date);
    }

    let mut flags: Vec<CooldownFlag> = latest_end
        .into_iter()
        .map(|((person_id, make, model), end_date)| {
            let days = cooldown_by_make.get(make).copied().unwrap_or(default_days);
            let until = end_date + Days::new(u64::from(days));
            CooldownFlag {
                person_id,
                make: make.to_string(),
                model: model.map(str::to_string),
                cooldown_ok: week_start >= until,
                cooldown_until: Some(until),
            }
        })
        .collect();

    flags.sort_by(|a, b| {
        (a.person_id, &a.make, &a.model).cmp(&(b.person_id, &b.make, &b.model))
    });
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{date, loan, rule_cooldown};

    #[test]
    fn no_history_yields_no_rows() {
        let flags = compute_cooldown_flags(&[], &[], date("2024-09-22"), 60);
        assert!(flags.is_empty());
    }

    #[test]
    fn model_grain_uses_rule_cooldown() {
        // Camry loan ended 45 days before week_start; 30-day Toyota rule.
        let history = vec![loan("A001", 1, "Toyota", Some("Camry"), "2024-08-08", None)];
        let rules = vec![rule_cooldown("Toyota", 30)];

        let flags = compute_cooldown_flags(&history, &rules, date("2024-09-22"), 60);

        assert_eq!(flags.len(), 1);
        let flag = &flags[0];
        assert_eq!(flag.model.as_deref(), Some("Camry"));
        assert!(flag.cooldown_ok);
        assert_eq!(flag.cooldown_until, Some(date("2024-09-07")));
    }

    #[test]
    fn default_days_apply_without_a_rule() {
        // Same loan, no rule: 60-day default still covers week_start.
        let history = vec![loan("A001", 1, "Toyota", Some("Camry"), "2024-08-08", None)];

        let flags = compute_cooldown_flags(&history, &[], date("2024-09-22"), 60);

        assert!(!flags[0].cooldown_ok);
        assert_eq!(flags[0].cooldown_until, Some(date("2024-10-07")));
    }

    #[test]
    fn boundary_day_is_admissible() {
        // cooldown_ok = week_start >= cooldown_until, so the expiry day
        // itself is in the clear.
        let history = vec![loan("A001", 1, "Honda", Some("Civic"), "2024-09-01", None)];
        let rules = vec![rule_cooldown("Honda", 21)];

        let at_expiry = compute_cooldown_flags(&history, &rules, date("2024-09-22"), 60);
        assert!(at_expiry[0].cooldown_ok);

        let day_before = compute_cooldown_flags(&history, &rules, date("2024-09-21"), 60);
        assert!(!day_before[0].cooldown_ok);
    }

    #[test]
    fn missing_model_blocks_at_make_grain() {
        let history = vec![loan("A002", 2, "Honda", None, "2024-09-08", None)];
        let rules = vec![rule_cooldown("Honda", 30)];

        let flags = compute_cooldown_flags(&history, &rules, date("2024-09-22"), 60);

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].model, None);
        assert!(!flags[0].cooldown_ok);
        assert_eq!(flags[0].cooldown_until, Some(date("2024-10-08")));
    }

    #[test]
    fn latest_loan_per_grain_wins() {
        let history = vec![
            loan("A001", 1, "Toyota", Some("Camry"), "2024-01-10", None),
            loan("A002", 1, "Toyota", Some("Camry"), "2024-09-15", None),
        ];
        let rules = vec![rule_cooldown("Toyota", 30)];

        let flags = compute_cooldown_flags(&history, &rules, date("2024-09-22"), 60);

        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].cooldown_until, Some(date("2024-10-15")));
        assert!(!flags[0].cooldown_ok);
    }

    #[test]
    fn grains_are_distinct_per_model() {
        let history = vec![
            loan("A001", 1, "Toyota", Some("Camry"), "2024-09-15", None),
            loan("A002", 1, "Toyota", Some("Highlander"), "2024-01-10", None),
        ];

        let flags = compute_cooldown_flags(&history, &[], date("2024-09-22"), 60);

        assert_eq!(flags.len(), 2);
        let camry = flags.iter().find(|f| f.model.as_deref() == Some("Camry"));
        let highlander = flags
            .iter()
            .find(|f| f.model.as_deref() == Some("Highlander"));
        assert!(!camry.unwrap().cooldown_ok);
        assert!(highlander.unwrap().cooldown_ok);
    }

    #[test]
    fn smallest_rule_cooldown_wins_regardless_of_order() {
        let history = vec![loan("A001", 1, "Toyota", Some("Camry"), "2024-09-01", None)];
        let forward = vec![rule_cooldown("Toyota", 45), rule_cooldown("Toyota", 15)];
        let reversed = vec![rule_cooldown("Toyota", 15), rule_cooldown("Toyota", 45)];

        let a = compute_cooldown_flags(&history, &forward, date("2024-09-22"), 60);
        let b = compute_cooldown_flags(&history, &reversed, date("2024-09-22"), 60);

        assert_eq!(a, b);
        assert_eq!(a[0].cooldown_until, Some(date("2024-09-16")));
    }
}
