use crate::domain::{Direction, DriveMode, PixelPoint, ViewportExtent};
use crate::telemetry::VehicleLocationSample;

/// Every mutation of the session state flows through one of these named
/// operations; nothing writes to the state directly.
#[derive(Debug)]
pub enum Command {
    /// A click on the waypoint map, still in viewport pixels. The extent is
    /// sampled by the caller at click time since the surface may resize.
    PlaceWaypoint { point: PixelPoint, extent: ViewportExtent },
    /// Undo the most recently placed waypoint.
    WithdrawWaypoint,
    ClearRoute,
    /// Finalize the planned route and hand it to the dispatch gateway.
    DispatchRoute,
    ToggleRunning,
    EmergencyStop,
    SetSpeed(u32),
    SetMode(DriveMode),
    Steer(Direction),
    /// Internal follow-up to `Steer`: the hold window elapsed.
    SettleSteering,
    /// A fresh sample from the telemetry simulator.
    RecordLocation(VehicleLocationSample),
    /// Operator-requested status refresh: re-stamp the current position.
    RefreshLocation,
    SetConnected(bool),
}
