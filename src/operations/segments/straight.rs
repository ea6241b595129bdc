use crate::geometry::ProfileCurve;
use crate::math::Point2;

/// Extends the curve by a parallel body section of `length` at the anchor
/// radius.
///
/// A zero (or negative) length is an explicit no-op branch: the curve is
/// returned unchanged.
#[must_use]
pub fn append_straight(curve: ProfileCurve, length: f64) -> ProfileCurve {
    if length <= 0.0 {
        return curve;
    }
    let Some(&anchor) = curve.last() else {
        return curve;
    };
    curve.appended([Point2::new(anchor.x + length, anchor.y)])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn anchor_curve() -> ProfileCurve {
        ProfileCurve::new(vec![Point2::new(0.0, 5.0), Point2::new(10.0, 6.0)])
    }

    #[test]
    fn extends_at_constant_radius() {
        let curve = append_straight(anchor_curve(), 4.0);
        assert_eq!(curve.len(), 3);
        let last = curve.last().unwrap();
        assert!((last.x - 14.0).abs() < 1e-12);
        assert!((last.y - 6.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_is_identity() {
        let curve = append_straight(anchor_curve(), 0.0);
        assert_eq!(curve, anchor_curve());
    }

    #[test]
    fn empty_curve_unchanged() {
        let curve = append_straight(ProfileCurve::new(vec![]), 4.0);
        assert!(curve.is_empty());
    }
}
