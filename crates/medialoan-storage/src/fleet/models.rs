/// Database row types for the fleet-side tables.
use medialoan_core::domain::parse_date_lenient;
use medialoan_core::{CurrentActivity, OpsCapacity, Vehicle};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub office: String,
    pub in_service_date: Option<String>,
    pub expected_turn_in_date: Option<String>,
}

impl VehicleRow {
    // Optional dates parse leniently; an unparseable value drops that
    // constraint, never the vehicle.
    pub fn into_domain(self) -> Vehicle {
        Vehicle {
            vin: self.vin,
            make: self.make,
            model: self.model,
            office: self.office,
            in_service_date: self.in_service_date.as_deref().and_then(parse_date_lenient),
            expected_turn_in_date: self
                .expected_turn_in_date
                .as_deref()
                .and_then(parse_date_lenient),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub activity_id: String,
    pub vin: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub activity_type: String,
}

impl ActivityRow {
    pub fn into_domain(self) -> CurrentActivity {
        CurrentActivity {
            activity_id: self.activity_id,
            vin: self.vin,
            start_date: self.start_date.as_deref().and_then(parse_date_lenient),
            end_date: self.end_date.as_deref().and_then(parse_date_lenient),
            activity_type: self.activity_type,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct OpsCapacityRow {
    pub office: String,
    pub date: Option<String>,
    pub slots: Option<i64>,
    pub drivers_per_day: Option<i64>,
}

impl OpsCapacityRow {
    /// Dated rows set one day's slots; dateless rows (the legacy
    /// drivers_per_day shape) are the office default. A row whose date is
    /// present but unparseable is dropped - it must not silently become
    /// the office default.
    pub fn into_domain(self) -> Option<OpsCapacity> {
        let date = match self.date.as_deref() {
            Some(raw) => match parse_date_lenient(raw) {
                Some(parsed) => Some(parsed),
                None => {
                    tracing::warn!(office = %self.office, raw, "dropping ops_capacity row with unparseable date");
                    return None;
                }
            },
            None => None,
        };
        let slots = self
            .slots
            .or(self.drivers_per_day)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        Some(OpsCapacity {
            office: self.office,
            date,
            slots,
        })
    }
}
