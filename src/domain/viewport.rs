/// Position local to the rendering surface, in pixels. Origin is the top-left
/// corner, y grows downward.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel size of the rendering surface, sampled at the moment of a transform.
/// The surface may resize at any time, so extents are never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportExtent {
    pub width: f64,
    pub height: f64,
}

impl ViewportExtent {
    pub fn new(width: f64, height: f64) -> Self {
        ViewportExtent { width, height }
    }

    /// A zero-area extent cannot anchor a transform; callers skip the frame instead of projecting.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(400.0, 300.0, false)]
    #[case(1.0, 1.0, false)]
    #[case(0.0, 300.0, true)]
    #[case(400.0, 0.0, true)]
    #[case(0.0, 0.0, true)]
    #[case(-400.0, 300.0, true)]
    fn degenerate_extents_have_no_area(#[case] width: f64, #[case] height: f64, #[case] expected: bool) {
        assert_eq!(ViewportExtent::new(width, height).is_degenerate(), expected);
    }
}
