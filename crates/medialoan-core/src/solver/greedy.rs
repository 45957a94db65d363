/// Greedy assigner.
///
/// Iterates scored candidates in the deterministic order exported by the
/// scorer and commits those that satisfy every live constraint:
/// VIN unused, per-partner weekly limit, remaining annual cap, and a start
/// day with both availability and capacity. No exceptions escape; a run
/// with zero admissible candidates produces an empty schedule.
use crate::config::SchedulerConfig;
use crate::domain::{week_days, Assignment, AvailabilityDay, LoanRecord, OpsCapacity, Rule, ScoredCandidate};
use crate::solver::capacity::CapacityLedger;
use crate::solver::scoring::compare_scored;
use crate::solver::tier_caps::build_cap_remaining;
use chrono::{Days, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Mutable admission state for one run. Single-writer; the loop owns it.
struct AssignState {
    ledger: CapacityLedger,
    /// None when tier caps are disabled.
    cap_remaining: Option<HashMap<(i64, String), u32>>,
    partner_week_count: HashMap<i64, u32>,
    vin_used: HashSet<String>,
}

/// Generate the week's schedule from scored candidates.
#[allow(clippy::too_many_arguments)]
pub fn generate_week_schedule(
    scored: &[ScoredCandidate],
    availability: &[AvailabilityDay],
    loan_history: &[LoanRecord],
    ops_capacity: &[OpsCapacity],
    rules: &[Rule],
    office: &str,
    week_start: NaiveDate,
    config: &SchedulerConfig,
) -> Vec<Assignment> {
    let candidates: Vec<&ScoredCandidate> = {
        let mut ordered: Vec<&ScoredCandidate> = scored.iter().collect();
        ordered.sort_by(|a, b| compare_scored(a, b));
        ordered
    };

    let ledger = if config.enable_capacity {
        CapacityLedger::for_week(ops_capacity, office, week_start)
    } else {
        CapacityLedger::unlimited(week_start)
    };

    let cap_remaining = config.enable_tier_caps.then(|| {
        let plain: Vec<_> = scored.iter().map(|s| s.candidate.clone()).collect();
        build_cap_remaining(
            &plain,
            rules,
            loan_history,
            week_start,
            &config.tier_cap_fallback,
        )
    });

    let mut state = AssignState {
        ledger,
        cap_remaining,
        partner_week_count: HashMap::new(),
        vin_used: HashSet::new(),
    };

    assign_candidates(&candidates, availability, office, week_start, config, &mut state)
}

/// Inner loop over pre-ordered candidates against existing state.
/// Re-running on the state left by a previous pass commits nothing new.
fn assign_candidates(
    ordered: &[&ScoredCandidate],
    availability: &[AvailabilityDay],
    office: &str,
    week_start: NaiveDate,
    config: &SchedulerConfig,
    state: &mut AssignState,
) -> Vec<Assignment> {
    let mut available_days_by_vin: HashMap<&str, HashSet<NaiveDate>> = HashMap::new();
    for row in availability.iter().filter(|r| r.available) {
        available_days_by_vin
            .entry(row.vin.as_str())
            .or_default()
            .insert(row.date);
    }
    let grid_end = week_start + Days::new(6);
    let days = week_days(week_start);

    let mut assignments = Vec::new();
    for scored in ordered {
        let candidate = &scored.candidate;

        if state.vin_used.contains(&candidate.vin) {
            continue;
        }
        let week_count = state
            .partner_week_count
            .get(&candidate.person_id)
            .copied()
            .unwrap_or(0);
        if week_count >= config.max_per_partner_per_week {
            continue;
        }
        if let Some(caps) = &state.cap_remaining {
            let remaining = caps
                .get(&(candidate.person_id, candidate.make.clone()))
                .copied()
                .unwrap_or(0);
            if remaining == 0 {
                continue;
            }
        }

        let vin_days = available_days_by_vin
            .get(candidate.vin.as_str())
            .cloned()
            .unwrap_or_default();
        let Some(start_day) = days.into_iter().find(|day| {
            state.ledger.remaining(*day) > 0
                && window_available(&vin_days, *day, config.loan_length_days, grid_end)
        }) else {
            continue;
        };

        if !state.ledger.try_consume(start_day) {
            continue;
        }
        state.vin_used.insert(candidate.vin.clone());
        *state
            .partner_week_count
            .entry(candidate.person_id)
            .or_insert(0) += 1;
        if let Some(caps) = &mut state.cap_remaining {
            if let Some(remaining) = caps.get_mut(&(candidate.person_id, candidate.make.clone())) {
                *remaining -= 1;
            }
        }

        assignments.push(Assignment {
            vin: candidate.vin.clone(),
            person_id: candidate.person_id,
            start_day,
            end_day: start_day + Days::new(u64::from(config.loan_length_days.max(1)) - 1),
            make: candidate.make.clone(),
            model: candidate.model.clone(),
            office: office.to_string(),
            score: scored.score,
            week_start,
        });
    }

    assignments
}

// A loan window fits when every day of it that falls inside the built grid
// is available. Days past the grid carry no flag and are unconstrained.
fn window_available(
    vin_days: &HashSet<NaiveDate>,
    start_day: NaiveDate,
    loan_length_days: u32,
    grid_end: NaiveDate,
) -> bool {
    (0..loan_length_days)
        .map(|offset| start_day + Days::new(u64::from(offset)))
        .take_while(|day| *day <= grid_end)
        .all(|day| vin_days.contains(&day))
}
