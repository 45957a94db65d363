//! Reusable test fixtures for the scheduling pipeline.
//!
//! Provides record builders and mock setup helpers to avoid duplication
//! across test files.

use crate::domain::{
    week_days, AvailabilityDay, Candidate, CurrentActivity, Eligibility, LoanRecord, OpsCapacity,
    Partner, Rank, Rule, Vehicle,
};
use chrono::NaiveDate;

// ============================================================================
// Builders
// ============================================================================

/// Parse a fixture date; panics on bad literals (tests only).
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
}

pub fn vehicle(vin: &str, make: &str, model: &str, office: &str) -> Vehicle {
    Vehicle {
        vin: vin.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        office: office.to_string(),
        in_service_date: None,
        expected_turn_in_date: None,
    }
}

pub fn partner(person_id: i64, office: &str) -> Partner {
    Partner {
        person_id,
        name: format!("Partner {person_id}"),
        office: office.to_string(),
        latitude: None,
        longitude: None,
    }
}

pub fn eligibility(person_id: i64, make: &str, rank: Rank) -> Eligibility {
    Eligibility {
        person_id,
        make: make.to_string(),
        rank,
    }
}

/// A rule carrying only a cooldown period.
pub fn rule_cooldown(make: &str, days: u32) -> Rule {
    Rule {
        make: make.to_string(),
        rank: Rank::Unranked,
        loan_cap_per_year: None,
        cooldown_period_days: Some(days),
    }
}

/// A rule carrying only an annual cap.
pub fn rule_cap(make: &str, rank: Rank, cap: u32) -> Rule {
    Rule {
        make: make.to_string(),
        rank,
        loan_cap_per_year: Some(cap),
        cooldown_period_days: None,
    }
}

/// A historical loan ending on `end_date` (start a week earlier).
pub fn loan(
    activity_id: &str,
    person_id: i64,
    make: &str,
    model: Option<&str>,
    end_date: &str,
    clips_received: Option<&str>,
) -> LoanRecord {
    let end = date(end_date);
    LoanRecord {
        activity_id: activity_id.to_string(),
        person_id,
        make: make.to_string(),
        model: model.map(str::to_string),
        start_date: end - chrono::Days::new(7),
        end_date: end,
        clips_received: clips_received.map(str::to_string),
    }
}

pub fn activity(
    activity_id: &str,
    vin: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> CurrentActivity {
    CurrentActivity {
        activity_id: activity_id.to_string(),
        vin: vin.to_string(),
        start_date: start_date.map(date),
        end_date: end_date.map(date),
        activity_type: "loan".to_string(),
    }
}

pub fn ops_capacity(office: &str, day: &str, slots: u32) -> OpsCapacity {
    OpsCapacity {
        office: office.to_string(),
        date: Some(date(day)),
        slots,
    }
}

/// The dateless office-default capacity row.
pub fn ops_capacity_default(office: &str, slots: u32) -> OpsCapacity {
    OpsCapacity {
        office: office.to_string(),
        date: None,
        slots,
    }
}

/// A 7-day grid for one VIN with the first `available_days` days
/// available and the rest blocked.
pub fn availability_week(
    vin: &str,
    make: &str,
    model: &str,
    market: &str,
    week_start: NaiveDate,
    available_days: u32,
) -> Vec<AvailabilityDay> {
    week_days(week_start)
        .into_iter()
        .enumerate()
        .map(|(i, day)| AvailabilityDay {
            vin: vin.to_string(),
            date: day,
            market: market.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            available: (i as u32) < available_days,
        })
        .collect()
}

/// A 7-day grid for one VIN, available exactly on `[from, to]`.
pub fn availability_window(
    vin: &str,
    make: &str,
    model: &str,
    market: &str,
    week_start: NaiveDate,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<AvailabilityDay> {
    week_days(week_start)
        .into_iter()
        .map(|day| AvailabilityDay {
            vin: vin.to_string(),
            date: day,
            market: market.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            available: day >= from && day <= to,
        })
        .collect()
}

/// A bare candidate at default rank C with full availability and no
/// publication history; tests override what they exercise.
pub fn candidate(
    vin: &str,
    person_id: i64,
    make: &str,
    model: &str,
    week_start: NaiveDate,
) -> Candidate {
    Candidate {
        vin: vin.to_string(),
        person_id,
        market: "Los Angeles".to_string(),
        make: make.to_string(),
        model: model.to_string(),
        week_start,
        available_days: 7,
        cooldown_ok: true,
        publication_rate: None,
        supported: false,
        coverage: 0.0,
        rank: Rank::C,
    }
}

// ============================================================================
// Mock Setup Helpers
// ============================================================================

use crate::ports::fleet_repository::MockFleetRepository;
use crate::ports::partner_repository::MockPartnerRepository;

/// Configure a fleet mock with empty defaults; tests override specific
/// expectations afterwards.
pub fn setup_empty_fleet_mock(mock: &mut MockFleetRepository) {
    mock.expect_get_vehicles().returning(|_| Ok(vec![]));
    mock.expect_get_current_activity().returning(|| Ok(vec![]));
    mock.expect_get_ops_capacity().returning(|_| Ok(vec![]));
}

/// Configure a partner mock with empty defaults.
pub fn setup_empty_partner_mock(mock: &mut MockPartnerRepository) {
    mock.expect_get_partners().returning(|| Ok(vec![]));
    mock.expect_get_eligibility().returning(|| Ok(vec![]));
    mock.expect_get_rules().returning(|| Ok(vec![]));
    mock.expect_get_loan_history().returning(|| Ok(vec![]));
}
