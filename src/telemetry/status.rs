/// Last reported health readings, as shown on the status panel. An absent
/// obstacle distance means the sensor has not reported yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleStatus {
    pub battery_percent: u8,
    pub obstacle_distance_cm: Option<u32>,
    pub speed_kmh: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BatteryLevel {
    Good,
    Low,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObstacleReading {
    Unknown,
    Clear,
    Near,
    Imminent,
}

impl VehicleStatus {
    pub fn battery_level(&self) -> BatteryLevel {
        match self.battery_percent {
            percent if percent > 50 => BatteryLevel::Good,
            percent if percent > 20 => BatteryLevel::Low,
            _ => BatteryLevel::Critical,
        }
    }

    pub fn obstacle_reading(&self) -> ObstacleReading {
        match self.obstacle_distance_cm {
            None => ObstacleReading::Unknown,
            Some(distance) if distance > 100 => ObstacleReading::Clear,
            Some(distance) if distance > 50 => ObstacleReading::Near,
            Some(_) => ObstacleReading::Imminent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn status(battery_percent: u8, obstacle_distance_cm: Option<u32>) -> VehicleStatus {
        VehicleStatus {
            battery_percent,
            obstacle_distance_cm,
            speed_kmh: 15,
        }
    }

    #[rstest]
    #[case(100, BatteryLevel::Good)]
    #[case(51, BatteryLevel::Good)]
    #[case(50, BatteryLevel::Low)]
    #[case(21, BatteryLevel::Low)]
    #[case(20, BatteryLevel::Critical)]
    #[case(0, BatteryLevel::Critical)]
    fn battery_levels(#[case] percent: u8, #[case] expected: BatteryLevel) {
        assert_eq!(status(percent, None).battery_level(), expected);
    }

    #[rstest]
    #[case(None, ObstacleReading::Unknown)]
    #[case(Some(250), ObstacleReading::Clear)]
    #[case(Some(101), ObstacleReading::Clear)]
    #[case(Some(100), ObstacleReading::Near)]
    #[case(Some(51), ObstacleReading::Near)]
    #[case(Some(50), ObstacleReading::Imminent)]
    #[case(Some(0), ObstacleReading::Imminent)]
    fn obstacle_readings(#[case] distance: Option<u32>, #[case] expected: ObstacleReading) {
        assert_eq!(status(85, distance).obstacle_reading(), expected);
    }
}
