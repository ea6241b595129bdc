use crate::geometry::{BoatTail, ProfileCurve};
use crate::math::Point2;

/// Appends the boat-tail taper at the anchor.
///
/// Radius mode extends to `(x + length, radius)`; angle mode drops the
/// anchor radius by `length * tan(angle)`. Mode resolution (and the
/// both/neither configuration errors) happens in
/// [`crate::geometry::ProfileParameters::boat_tail`].
#[must_use]
pub fn append_boat_tail(curve: ProfileCurve, boat_tail: &BoatTail) -> ProfileCurve {
    let Some(&anchor) = curve.last() else {
        return curve;
    };
    match *boat_tail {
        BoatTail::None => curve,
        BoatTail::Radius { length, radius } => {
            curve.appended([Point2::new(anchor.x + length, radius)])
        }
        BoatTail::Angle { length, degrees } => {
            let dy = length * degrees.to_radians().tan();
            curve.appended([Point2::new(anchor.x + length, anchor.y - dy)])
        }
    }
}
