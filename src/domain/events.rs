use crate::domain::{Direction, DriveMode, GeoCoordinate};
use std::fmt::{Display, Formatter};

/// Operator-facing outcome of an applied command. The presentation layer
/// renders these as notices; the `Display` impl is the notice text.
#[derive(Debug, PartialEq)]
pub enum Event {
    WaypointPlaced { coordinate: GeoCoordinate },
    WaypointWithdrawn,
    NothingToWithdraw,
    RouteCleared,
    RouteDispatched { waypoints: usize },
    NothingToDispatch,
    MissionResumed,
    MissionPaused,
    EmergencyStopEngaged,
    SpeedChanged(u32),
    ModeChanged(DriveMode),
    Steered(Direction),
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::WaypointPlaced { coordinate } => {
                write!(f, "Waypoint added at coordinates: {:.6}, {:.6}", coordinate.latitude, coordinate.longitude)
            }
            Event::WaypointWithdrawn => write!(f, "Previous waypoint removed"),
            Event::NothingToWithdraw => write!(f, "No waypoints to remove"),
            Event::RouteCleared => write!(f, "All waypoints cleared"),
            Event::RouteDispatched { waypoints } => write!(f, "Instructions sent to vehicle ({} waypoints)", waypoints),
            Event::NothingToDispatch => write!(f, "No waypoints to send"),
            Event::MissionResumed => write!(f, "Mission resumed"),
            Event::MissionPaused => write!(f, "Mission paused"),
            Event::EmergencyStopEngaged => write!(f, "Emergency stop activated"),
            Event::SpeedChanged(speed) => write!(f, "Speed set to {} km/h", speed),
            Event::ModeChanged(DriveMode::Manual) => write!(f, "Switched to manual mode"),
            Event::ModeChanged(DriveMode::Waypoint) => write!(f, "Switched to waypoint mode"),
            Event::Steered(Direction::Forward) => write!(f, "Moving forward"),
            Event::Steered(Direction::Backward) => write!(f, "Moving backward"),
            Event::Steered(Direction::Left) => write!(f, "Turning left"),
            Event::Steered(Direction::Right) => write!(f, "Turning right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn placed(latitude: f64, longitude: f64) -> Event {
        Event::WaypointPlaced {
            coordinate: GeoCoordinate { latitude, longitude },
        }
    }

    fn dispatched(waypoints: usize) -> Event {
        Event::RouteDispatched { waypoints }
    }

    #[rstest]
    #[case(placed(45.0, -90.0), "Waypoint added at coordinates: 45.000000, -90.000000")]
    #[case(Event::NothingToWithdraw, "No waypoints to remove")]
    #[case(dispatched(3), "Instructions sent to vehicle (3 waypoints)")]
    #[case(Event::EmergencyStopEngaged, "Emergency stop activated")]
    #[case(Event::Steered(Direction::Left), "Turning left")]
    fn notice_text(#[case] event: Event, #[case] expected: &str) {
        assert_eq!(event.to_string(), expected);
    }
}
