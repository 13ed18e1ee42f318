use crate::domain::GeoCoordinate;
use chrono::{DateTime, Utc};

/// The vehicle's reported position at a moment in time. The timestamp only
/// feeds the "last updated" display, never ordering logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleLocationSample {
    pub coordinate: GeoCoordinate,
    pub captured_at: DateTime<Utc>,
}

impl VehicleLocationSample {
    pub fn at(coordinate: GeoCoordinate, captured_at: DateTime<Utc>) -> Self {
        VehicleLocationSample { coordinate, captured_at }
    }

    /// Same position, fresh timestamp. Backs the manual status refresh.
    pub fn restamped(&self, now: DateTime<Utc>) -> Self {
        VehicleLocationSample {
            coordinate: self.coordinate,
            captured_at: now,
        }
    }
}
