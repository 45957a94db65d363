/// Availability grid builder.
///
/// Produces one row per office VIN per day of the target week, with a
/// Boolean `available` flag. A day is unavailable when the vehicle is not
/// yet in service, already scheduled for turn-in, or blocked by a current
/// activity whose closed interval covers it.
use crate::domain::{week_days, AvailabilityDay, CurrentActivity, Vehicle};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Build the 7-day availability grid for one office.
///
/// Row-level failures are silent: a vehicle with no in-service or turn-in
/// date simply has no constraint in that dimension, and an activity with a
/// missing endpoint blocks on its remaining side only. An empty vehicle
/// set yields an empty grid.
pub fn build_availability_grid(
    vehicles: &[Vehicle],
    current_activity: &[CurrentActivity],
    week_start: NaiveDate,
    office: &str,
) -> Vec<AvailabilityDay> {
    let days = week_days(week_start);

    let mut activity_by_vin: HashMap<&str, Vec<&CurrentActivity>> = HashMap::new();
    for activity in current_activity {
        activity_by_vin
            .entry(activity.vin.as_str())
            .or_default()
            .push(activity);
    }

    let mut grid = Vec::new();
    for vehicle in vehicles.iter().filter(|v| v.office == office) {
        let activities = activity_by_vin
            .get(vehicle.vin.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for day in days {
            grid.push(AvailabilityDay {
                vin: vehicle.vin.clone(),
                date: day,
                market: vehicle.office.clone(),
                make: vehicle.make.clone(),
                model: vehicle.model.clone(),
                available: day_is_available(vehicle, activities, day),
            });
        }
    }

    grid
}

fn day_is_available(vehicle: &Vehicle, activities: &[&CurrentActivity], day: NaiveDate) -> bool {
    if let Some(in_service) = vehicle.in_service_date {
        if day < in_service {
            return false;
        }
    }
    if let Some(turn_in) = vehicle.expected_turn_in_date {
        if day >= turn_in {
            return false;
        }
    }
    !activities.iter().any(|a| activity_blocks(a, day))
}

// Both endpoints are inclusive; a missing endpoint leaves that side open.
fn activity_blocks(activity: &CurrentActivity, day: NaiveDate) -> bool {
    match (activity.start_date, activity.end_date) {
        (Some(start), Some(end)) => day >= start && day <= end,
        (Some(start), None) => day >= start,
        (None, Some(end)) => day <= end,
        (None, None) => false,
    }
}
