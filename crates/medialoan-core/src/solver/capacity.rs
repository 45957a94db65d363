/// Office capacity ledger: loan starts remaining per calendar day.
use crate::domain::{week_days, OpsCapacity};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Mutable map of `date -> remaining_slots` for the target week.
/// Single-owner, single-writer inside the assigner.
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    remaining: HashMap<NaiveDate, u32>,
}

impl CapacityLedger {
    /// Initialize from ops_capacity for the week's seven days. A dated row
    /// sets that day's slots; a dateless row is the office default for
    /// every day; a day covered by neither gets 0.
    pub fn for_week(ops_capacity: &[OpsCapacity], office: &str, week_start: NaiveDate) -> Self {
        let office_rows: Vec<&OpsCapacity> =
            ops_capacity.iter().filter(|c| c.office == office).collect();
        let default_slots = office_rows
            .iter()
            .find(|c| c.date.is_none())
            .map(|c| c.slots)
            .unwrap_or(0);

        let remaining = week_days(week_start)
            .into_iter()
            .map(|day| {
                let slots = office_rows
                    .iter()
                    .find(|c| c.date == Some(day))
                    .map(|c| c.slots)
                    .unwrap_or(default_slots);
                (day, slots)
            })
            .collect();

        Self { remaining }
    }

    /// A ledger that never refuses; used when the capacity check is
    /// toggled off for diagnostics.
    pub fn unlimited(week_start: NaiveDate) -> Self {
        let remaining = week_days(week_start)
            .into_iter()
            .map(|day| (day, u32::MAX))
            .collect();
        Self { remaining }
    }

    pub fn remaining(&self, day: NaiveDate) -> u32 {
        self.remaining.get(&day).copied().unwrap_or(0)
    }

    /// Consume one slot on `day`; refuses when the bucket is empty or the
    /// day is outside the week.
    pub fn try_consume(&mut self, day: NaiveDate) -> bool {
        match self.remaining.get_mut(&day) {
            Some(slots) if *slots > 0 => {
                *slots = slots.saturating_sub(1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{date, ops_capacity, ops_capacity_default};

    const WEEK: &str = "2025-09-22";

    #[test]
    fn missing_days_default_to_zero() {
        let rows = vec![ops_capacity("Los Angeles", "2025-09-22", 2)];
        let ledger = CapacityLedger::for_week(&rows, "Los Angeles", date(WEEK));

        assert_eq!(ledger.remaining(date("2025-09-22")), 2);
        assert_eq!(ledger.remaining(date("2025-09-23")), 0);
    }

    #[test]
    fn dateless_row_is_the_office_default() {
        let rows = vec![
            ops_capacity_default("Los Angeles", 10),
            ops_capacity("Los Angeles", "2025-09-24", 0),
        ];
        let ledger = CapacityLedger::for_week(&rows, "Los Angeles", date(WEEK));

        assert_eq!(ledger.remaining(date("2025-09-22")), 10);
        assert_eq!(ledger.remaining(date("2025-09-24")), 0);
        assert_eq!(ledger.remaining(date("2025-09-28")), 10);
    }

    #[test]
    fn other_offices_do_not_contribute() {
        let rows = vec![ops_capacity_default("Chicago", 10)];
        let ledger = CapacityLedger::for_week(&rows, "Los Angeles", date(WEEK));

        assert_eq!(ledger.remaining(date("2025-09-22")), 0);
    }

    #[test]
    fn consume_decrements_and_refuses_at_zero() {
        let rows = vec![ops_capacity("Los Angeles", "2025-09-22", 1)];
        let mut ledger = CapacityLedger::for_week(&rows, "Los Angeles", date(WEEK));

        assert!(ledger.try_consume(date("2025-09-22")));
        assert!(!ledger.try_consume(date("2025-09-22")));
        assert!(!ledger.try_consume(date("2025-09-23")));
    }

    #[test]
    fn days_outside_the_week_refuse() {
        let rows = vec![ops_capacity_default("Los Angeles", 10)];
        let mut ledger = CapacityLedger::for_week(&rows, "Los Angeles", date(WEEK));

        assert!(!ledger.try_consume(date("2025-09-29")));
    }
}
