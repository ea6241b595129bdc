use crate::geometry::ProfileCurve;
use crate::math::Point2;

/// Appends the airframe shoulder at the anchor.
///
/// Steps to `shoulder_radius` at the anchor `x`, runs `shoulder_length` at
/// that radius, then — when the profile is hollow — drops `wall_thickness`
/// toward the axis so the wall offset has a rear face to land on:
///
/// ```text
/// (x, r_s) → (x + len_s, r_s) [→ (x + len_s, r_s - k)]
/// ```
///
/// A zero shoulder length is an explicit no-op branch.
#[must_use]
pub fn append_shoulder(
    curve: ProfileCurve,
    shoulder_radius: f64,
    shoulder_length: f64,
    wall_thickness: f64,
) -> ProfileCurve {
    if shoulder_length <= 0.0 {
        return curve;
    }
    let Some(&anchor) = curve.last() else {
        return curve;
    };
    let x_end = anchor.x + shoulder_length;
    let mut extra = vec![
        Point2::new(anchor.x, shoulder_radius),
        Point2::new(x_end, shoulder_radius),
    ];
    if wall_thickness > 0.0 {
        extra.push(Point2::new(x_end, shoulder_radius - wall_thickness));
    }
    curve.appended(extra)
}
