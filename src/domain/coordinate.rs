use serde::{Deserialize, Serialize};

/// A point on the map in degrees. Latitude spans [-90, 90], longitude [-180, 180].
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}
