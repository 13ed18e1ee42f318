use crate::domain::GeoCoordinate;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("the planned route has no waypoints")]
pub struct EmptyRouteError;

/// The operator's planned route: an ordered list of waypoints where insertion
/// order is the traversal order. Mutations only ever touch the tail, so the
/// sequence never reorders and duplicates are kept as placed.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct WaypointPath {
    waypoints: Vec<GeoCoordinate>,
}

impl WaypointPath {
    pub fn new() -> Self {
        WaypointPath::default()
    }

    /// Appends a waypoint to the tail and returns the new route length.
    pub fn append(&mut self, coordinate: GeoCoordinate) -> usize {
        self.waypoints.push(coordinate);
        self.waypoints.len()
    }

    /// Removes the most recently placed waypoint and returns it.
    pub fn remove_last(&mut self) -> Result<GeoCoordinate, EmptyRouteError> {
        self.waypoints.pop().ok_or(EmptyRouteError)
    }

    /// Drops every waypoint. Idempotent.
    pub fn clear_all(&mut self) {
        self.waypoints.clear();
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[GeoCoordinate] {
        &self.waypoints
    }

    /// Adjacent waypoint pairs, in traversal order, for drawing the connecting
    /// lines. Empty and single-waypoint routes yield no segments.
    pub fn segments(&self) -> impl Iterator<Item = (GeoCoordinate, GeoCoordinate)> + '_ {
        self.waypoints.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Snapshots the route for handoff to the dispatch gateway.
    pub fn finalize(&self) -> Result<RouteManifest, EmptyRouteError> {
        if self.waypoints.is_empty() {
            return Err(EmptyRouteError);
        }
        Ok(RouteManifest {
            waypoints: self.waypoints.clone(),
        })
    }
}

/// Immutable copy of a finalized route, the only thing the dispatch gateway
/// ever receives.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteManifest {
    waypoints: Vec<GeoCoordinate>,
}

impl RouteManifest {
    pub fn waypoints(&self) -> &[GeoCoordinate] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn waypoint(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate { latitude, longitude }
    }

    #[test]
    fn append_grows_the_tail_in_placement_order() {
        let mut path = WaypointPath::new();

        assert_eq!(path.append(waypoint(10.0, 20.0)), 1);
        assert_eq!(path.append(waypoint(30.0, 40.0)), 2);

        assert_eq!(path.waypoints(), &[waypoint(10.0, 20.0), waypoint(30.0, 40.0)]);
    }

    #[test]
    fn remove_last_on_an_empty_route_fails_and_leaves_it_empty() {
        let mut path = WaypointPath::new();

        assert_eq!(path.remove_last(), Err(EmptyRouteError));
        assert!(path.is_empty());
    }

    #[test]
    fn remove_last_undoes_exactly_the_previous_append() {
        let mut path = WaypointPath::new();
        path.append(waypoint(10.0, 20.0));
        let before = path.clone();

        path.append(waypoint(30.0, 40.0));
        let removed = path.remove_last();

        assert_eq!(removed, Ok(waypoint(30.0, 40.0)));
        assert_eq!(path, before);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn clear_all_always_yields_an_empty_route(#[case] size: usize) {
        let mut path = WaypointPath::new();
        for i in 0..size {
            path.append(waypoint(i as f64, i as f64));
        }

        path.clear_all();
        assert!(path.is_empty());

        // Idempotent
        path.clear_all();
        assert!(path.is_empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(5, 4)]
    fn a_route_of_n_waypoints_has_n_minus_one_segments(#[case] size: usize, #[case] expected: usize) {
        let mut path = WaypointPath::new();
        for i in 0..size {
            path.append(waypoint(i as f64, -(i as f64)));
        }

        let segments = path.segments().collect::<Vec<_>>();

        assert_eq!(segments.len(), expected);
        for (i, (from, to)) in segments.iter().enumerate() {
            assert_eq!(*from, path.waypoints()[i]);
            assert_eq!(*to, path.waypoints()[i + 1]);
        }
    }

    #[test]
    fn segments_restart_from_the_head_on_every_call() {
        let mut path = WaypointPath::new();
        path.append(waypoint(0.0, 0.0));
        path.append(waypoint(1.0, 1.0));
        path.append(waypoint(2.0, 2.0));

        let first = path.segments().collect::<Vec<_>>();
        let second = path.segments().collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn finalize_snapshots_the_current_route() {
        let mut path = WaypointPath::new();
        path.append(waypoint(10.0, 20.0));
        path.append(waypoint(30.0, 40.0));

        let manifest = path.finalize().unwrap();
        path.clear_all();

        // The manifest is unaffected by later mutation
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.waypoints(), &[waypoint(10.0, 20.0), waypoint(30.0, 40.0)]);
    }

    #[test]
    fn finalize_refuses_an_empty_route() {
        let path = WaypointPath::new();

        assert_eq!(path.finalize(), Err(EmptyRouteError));
    }
}
