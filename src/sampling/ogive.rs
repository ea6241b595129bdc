use crate::math::Point2;

/// Samples the tangent-ogive body curve on `x ∈ [0, ogive_length)`.
///
/// For `resolution` evenly spaced stations:
///
/// ```text
/// y = sqrt(rho^2 - (ogive_length - x)^2) + base_radius - rho
/// ```
///
/// Stations with `x < xt` are discarded: that region is already covered by
/// the nose arc, which hands over at the exact tangency point. The retained
/// points continue the outer curve in increasing `x` order.
pub fn sample_ogive(
    base_radius: f64,
    ogive_length: f64,
    ogive_radius: f64,
    xt: f64,
    resolution: u32,
) -> impl Iterator<Item = Point2> {
    let step = ogive_length / f64::from(resolution);
    (0..resolution)
        .map(move |i| {
            let x = f64::from(i) * step;
            let y = (ogive_radius * ogive_radius - (ogive_length - x).powi(2)).sqrt()
                + base_radius
                - ogive_radius;
            Point2::new(x, y)
        })
        .filter(move |p| p.x >= xt)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::tangency;
    use crate::math::polyline_2d::is_x_non_decreasing;
    use approx::assert_relative_eq;

    #[test]
    fn rear_station_approaches_base_radius() {
        // y(L - step) is one station short of the full base radius; y(L)
        // itself is never sampled on the half-open interval.
        let rho = tangency::ogive_radius(33.0, 264.0);
        let pts: Vec<Point2> = sample_ogive(33.0, 264.0, rho, 0.0, 1000).collect();
        let last = pts.last().unwrap();
        assert!(last.x < 264.0);
        assert_relative_eq!(last.y, 33.0, epsilon = 0.05);
    }

    #[test]
    fn respects_tangency_cutoff() {
        let rho = tangency::ogive_radius(33.0, 264.0);
        let geo = tangency::solve(33.0, 264.0, 10.0, rho).unwrap();
        for p in sample_ogive(33.0, 264.0, rho, geo.xt, 500) {
            assert!(p.x >= geo.xt);
        }
    }

    #[test]
    fn x_is_non_decreasing() {
        let rho = tangency::ogive_radius(33.0, 264.0);
        let pts: Vec<Point2> = sample_ogive(33.0, 264.0, rho, 0.0, 500).collect();
        assert!(is_x_non_decreasing(&pts, 1e-9));
    }

    #[test]
    fn curve_matches_closed_form() {
        let rho = tangency::ogive_radius(20.0, 80.0);
        for p in sample_ogive(20.0, 80.0, rho, 0.0, 100) {
            let expected = (rho * rho - (80.0 - p.x).powi(2)).sqrt() + 20.0 - rho;
            assert_relative_eq!(p.y, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn all_y_non_negative() {
        let rho = tangency::ogive_radius(33.0, 264.0);
        for p in sample_ogive(33.0, 264.0, rho, 0.0, 1000) {
            assert!(p.y >= -1e-9, "negative radius at ({}, {})", p.x, p.y);
        }
    }
}
