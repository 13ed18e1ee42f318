/// Whether the vehicle is currently in motion. Drives both the telemetry
/// simulator gate and the marker's visual emphasis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionState {
    Stationary,
    Moving,
}

/// Which half of the control panel is live. Manual steering is ignored in
/// waypoint mode, map placement is ignored in manual mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DriveMode {
    Manual,
    Waypoint,
}

/// A manual steering input from the directional pad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}
