use crate::domain::{MotionState, PixelPoint, ViewportExtent};
use crate::projection;
use crate::telemetry::VehicleLocationSample;

/// How loudly the marker draws itself. A moving vehicle pulses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerEmphasis {
    Neutral,
    Pulsing,
}

/// Render-ready vehicle marker: where on the viewport to draw the vehicle and
/// with which emphasis. Recomputed whenever the sample or the extent changes;
/// resize detection is the rendering collaborator's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleMarker {
    pub position: PixelPoint,
    pub emphasis: MarkerEmphasis,
}

impl VehicleMarker {
    /// Projects the latest location sample onto the viewport. A zero-area
    /// extent yields `None`, which renders as a skipped frame.
    pub fn derive(sample: &VehicleLocationSample, motion: MotionState, extent: ViewportExtent) -> Option<VehicleMarker> {
        if extent.is_degenerate() {
            return None;
        }

        Some(VehicleMarker {
            position: projection::to_pixel(sample.coordinate, extent),
            emphasis: match motion {
                MotionState::Moving => MarkerEmphasis::Pulsing,
                MotionState::Stationary => MarkerEmphasis::Neutral,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoCoordinate;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample() -> VehicleLocationSample {
        VehicleLocationSample::at(GeoCoordinate { latitude: 45.0, longitude: 0.0 }, Utc::now())
    }

    #[rstest]
    #[case(MotionState::Moving, MarkerEmphasis::Pulsing)]
    #[case(MotionState::Stationary, MarkerEmphasis::Neutral)]
    fn emphasis_follows_the_motion_state(#[case] motion: MotionState, #[case] expected: MarkerEmphasis) {
        let marker = VehicleMarker::derive(&sample(), motion, ViewportExtent::new(400.0, 300.0)).unwrap();

        assert_eq!(marker.emphasis, expected);
    }

    #[test]
    fn position_is_the_projected_sample() {
        let marker = VehicleMarker::derive(&sample(), MotionState::Stationary, ViewportExtent::new(400.0, 300.0)).unwrap();

        assert_eq!(marker.position, PixelPoint { x: 200.0, y: 150.0 });
    }

    #[test]
    fn a_degenerate_extent_yields_no_marker() {
        let marker = VehicleMarker::derive(&sample(), MotionState::Moving, ViewportExtent::new(0.0, 300.0));

        assert_eq!(marker, None);
    }
}
