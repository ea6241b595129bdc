use crate::math::Point2;
use crate::operations::BuiltProfile;

/// Circle marker for visually verifying the nose arc: centered on the axis
/// at the nose-sphere center, with the tip radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoseCircle {
    pub center: Point2,
    pub radius: f64,
}

/// The data a host plotting tool needs to draw a build: the outer curve,
/// the inner curve when present, and the nose-circle marker.
///
/// Rendering itself is out of scope; this only packages coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub outer: Vec<[f64; 2]>,
    pub inner: Option<Vec<[f64; 2]>>,
    pub nose_circle: NoseCircle,
}

impl PlotData {
    /// Extracts plot data from a finished build.
    #[must_use]
    pub fn new(built: &BuiltProfile) -> Self {
        fn rows(points: &[Point2]) -> Vec<[f64; 2]> {
            points.iter().map(|p| [p.x, p.y]).collect()
        }
        Self {
            outer: rows(built.outer.points()),
            inner: built.inner.as_ref().map(|c| rows(c.points())),
            nose_circle: NoseCircle {
                center: Point2::new(built.tangency.x0, 0.0),
                radius: built.parameters.tip_radius,
            },
        }
    }
}
