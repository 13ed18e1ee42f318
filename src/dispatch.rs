use crate::domain::route::RouteManifest;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("could not serialize the route payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The link to the actual vehicle. The core's only obligation is to hand a
/// finalized route over; whether the transmission succeeds is the gateway's
/// concern, not the planner's.
#[async_trait]
pub trait DispatchGateway: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    async fn send(&self, route: RouteManifest) -> Result<(), DispatchError>;
}

/// Stand-in gateway that logs the payload it would transmit.
#[derive(Debug, Default)]
pub struct LoggingDispatchGateway;

#[async_trait]
impl DispatchGateway for LoggingDispatchGateway {
    fn id(&self) -> &'static str {
        "logging"
    }

    #[instrument(skip_all)]
    async fn send(&self, route: RouteManifest) -> Result<(), DispatchError> {
        let payload = serde_json::to_string(&route)?;
        info!("📡 Sending {} waypoint(s) to the vehicle: {}", route.len(), payload);
        for (index, waypoint) in route.waypoints().iter().enumerate() {
            debug!("📡 {}. ({:.6}, {:.6})", index + 1, waypoint.latitude, waypoint.longitude);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoCoordinate;
    use crate::domain::route::WaypointPath;

    #[tokio::test]
    async fn the_logging_gateway_accepts_any_finalized_route() {
        let mut path = WaypointPath::new();
        path.append(GeoCoordinate { latitude: 45.0, longitude: -90.0 });
        let manifest = path.finalize().unwrap();

        let gateway = LoggingDispatchGateway;

        assert!(gateway.send(manifest).await.is_ok());
    }
}
