use crate::geometry::TangencyGeometry;
use crate::math::{Point2, TOLERANCE};

/// Samples the spherical nose cap from the apex to the tangency point.
///
/// Parametrizes the circle of radius `tip_radius` centered at `(x0, 0)` by
/// `theta ∈ [0, theta_t]` with `theta_t = atan(yt / (x0 - xt))`:
///
/// ```text
/// x = x0 - rn*cos(theta)
/// y = rn*sin(theta)
/// ```
///
/// Samples that overshoot the tangency point (`x > xt` or `y > yt`, a
/// floating-point artifact of the parametrization) are discarded, and the
/// exact tangency point `(xt, yt)` is appended so the curve continues into
/// the ogive body without a gap.
///
/// The sequence is lazy; callers collect or extend from it. `resolution`
/// must be ≥ 2 (enforced upstream by parameter validation).
pub fn sample_nose_arc(
    tangency: &TangencyGeometry,
    tip_radius: f64,
    resolution: u32,
) -> impl Iterator<Item = Point2> {
    let TangencyGeometry { x0, xt, yt, .. } = *tangency;

    // Degenerate cap (sharp ogive): the arc collapses to the tangency point.
    let theta_t = if tip_radius < TOLERANCE || (x0 - xt).abs() < TOLERANCE {
        0.0
    } else {
        (yt / (x0 - xt)).atan()
    };

    let last = f64::from(resolution.max(2) - 1);
    (0..resolution)
        .map(move |i| {
            let theta = theta_t * f64::from(i) / last;
            Point2::new(x0 - tip_radius * theta.cos(), tip_radius * theta.sin())
        })
        .filter(move |p| p.x <= xt && p.y <= yt)
        .chain(std::iter::once(Point2::new(xt, yt)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::tangency;
    use crate::math::polyline_2d::is_x_non_decreasing;

    fn reference_geometry() -> TangencyGeometry {
        let rho = tangency::ogive_radius(33.0, 264.0);
        tangency::solve(33.0, 264.0, 10.0, rho).unwrap()
    }

    #[test]
    fn starts_at_apex() {
        let geo = reference_geometry();
        let pts: Vec<Point2> = sample_nose_arc(&geo, 10.0, 100).collect();
        assert!((pts[0].x - geo.xa).abs() < 1e-9, "x={}", pts[0].x);
        assert!(pts[0].y.abs() < 1e-9, "y={}", pts[0].y);
    }

    #[test]
    fn ends_exactly_at_tangency_point() {
        let geo = reference_geometry();
        let pts: Vec<Point2> = sample_nose_arc(&geo, 10.0, 100).collect();
        let last = pts.last().unwrap();
        assert!((last.x - geo.xt).abs() < 1e-12);
        assert!((last.y - geo.yt).abs() < 1e-12);
    }

    #[test]
    fn all_points_on_nose_sphere() {
        let geo = reference_geometry();
        for p in sample_nose_arc(&geo, 10.0, 50) {
            let r = ((p.x - geo.x0).powi(2) + p.y * p.y).sqrt();
            assert!((r - 10.0).abs() < 1e-9, "off-sphere point ({}, {})", p.x, p.y);
        }
    }

    #[test]
    fn no_point_past_tangency() {
        let geo = reference_geometry();
        for p in sample_nose_arc(&geo, 10.0, 100) {
            assert!(p.x <= geo.xt + 1e-12);
            assert!(p.y <= geo.yt + 1e-12);
        }
    }

    #[test]
    fn x_is_non_decreasing() {
        let geo = reference_geometry();
        let pts: Vec<Point2> = sample_nose_arc(&geo, 10.0, 200).collect();
        assert!(is_x_non_decreasing(&pts, 1e-9));
    }

    #[test]
    fn minimal_resolution() {
        let geo = reference_geometry();
        let pts: Vec<Point2> = sample_nose_arc(&geo, 10.0, 2).collect();
        // At least the apex sample and the exact tangency point.
        assert!(pts.len() >= 2);
    }
}
