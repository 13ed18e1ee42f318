use crate::domain::ViewportExtent;
use crate::extensions::date_time_ext::HumanizedAge;
use crate::marker::VehicleMarker;
use crate::projection;
use crate::store::SessionState;
use chrono::Utc;
use tokio::sync::watch::Receiver;
use tracing::{debug, instrument};

/// Headless stand-in for the control panel's render side: on every published
/// snapshot it logs the status panel, the planned route projected onto the
/// configured extent, and the render-ready vehicle marker.
#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<SessionState>, extent: ViewportExtent) {
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow().clone();
        render(&snapshot, extent);
    }
}

fn render(snapshot: &SessionState, extent: ViewportExtent) {
    // A resized-to-nothing surface renders as a skipped frame.
    if extent.is_degenerate() {
        return;
    }

    debug!(
        "📟 Link {}, battery {}% [{:?}], obstacle {} [{:?}], speed {} km/h",
        if snapshot.connected { "up" } else { "down" },
        snapshot.status.battery_percent,
        snapshot.status.battery_level(),
        snapshot
            .status
            .obstacle_distance_cm
            .map_or_else(|| "n/a".to_string(), |distance| format!("{} cm", distance)),
        snapshot.status.obstacle_reading(),
        snapshot.status.speed_kmh,
    );

    if !snapshot.route.is_empty() {
        let points = snapshot
            .route
            .waypoints()
            .iter()
            .enumerate()
            .map(|(index, &coordinate)| {
                let pixel = projection::to_pixel(coordinate, extent);
                format!("{}:({:.0},{:.0})", index + 1, pixel.x, pixel.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let lines = snapshot
            .route
            .segments()
            .map(|(from, to)| {
                let start = projection::to_pixel(from, extent);
                let end = projection::to_pixel(to, extent);
                format!("({:.0},{:.0})-({:.0},{:.0})", start.x, start.y, end.x, end.y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        debug!("🗺️ Route: {} waypoint(s) {} connected by {}", snapshot.route.len(), points, lines);
    }

    if let Some(marker) = VehicleMarker::derive(&snapshot.vehicle, snapshot.motion, extent) {
        debug!(
            "🚗 Vehicle at ({:.6}, {:.6}), marker at ({:.1}, {:.1}) px [{:?}], updated {}",
            snapshot.vehicle.coordinate.latitude,
            snapshot.vehicle.coordinate.longitude,
            marker.position.x,
            marker.position.y,
            marker.emphasis,
            snapshot.vehicle.captured_at.humanized_age(Utc::now())
        );
    }
}
