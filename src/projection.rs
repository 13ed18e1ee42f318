use crate::domain::{GeoCoordinate, PixelPoint, ViewportExtent};

/// Converts a viewport-local pixel position into map degrees using a linear
/// equirectangular mapping.
///
/// Latitude is measured from the bottom edge of the viewport, so in-bounds
/// input only ever yields latitudes in [0, 90]: the southern hemisphere is not
/// reachable through this mapping, while longitude covers the full
/// [-180, 180]. Ground software already stores routes expressed in this frame,
/// so the asymmetry must stay as is.
///
/// A zero-area extent is the caller's responsibility to guard; see
/// [`ViewportExtent::is_degenerate`].
pub fn to_geo(point: PixelPoint, extent: ViewportExtent) -> GeoCoordinate {
    debug_assert!(!extent.is_degenerate(), "projecting over a zero-area viewport");

    GeoCoordinate {
        latitude: ((extent.height - point.y) / extent.height) * 90.0,
        longitude: (point.x / extent.width) * 360.0 - 180.0,
    }
}

/// Converts map degrees into a viewport-local pixel position. Exact algebraic
/// inverse of [`to_geo`] over the ranges the forward transform produces.
pub fn to_pixel(coordinate: GeoCoordinate, extent: ViewportExtent) -> PixelPoint {
    debug_assert!(!extent.is_degenerate(), "projecting over a zero-area viewport");

    PixelPoint {
        x: ((coordinate.longitude + 180.0) / 360.0) * extent.width,
        y: extent.height - (coordinate.latitude / 90.0) * extent.height,
    }
}
