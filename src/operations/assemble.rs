use crate::error::{GeometryDomainError, Result};
use crate::geometry::{AssembledProfile, ProfileCurve};
use crate::math::polyline_2d::dedup_consecutive;
use crate::math::{Point2, TOLERANCE};

/// Stitches the outer curve and optional inner curve into one closed ring.
///
/// The outer curve runs tip→rear; the inner curve must be traversed
/// rear→tip to keep the polygon non-self-intersecting when revolved, so it
/// is appended reversed:
///
/// ```text
/// outer + reversed(inner) + [first_outer]
/// ```
///
/// Without an inner curve, the outer curve is dropped to the base plane at
/// `(x_last, 0)` (skipped when already on the axis) before closing back to
/// the first point. Exact consecutive duplicates are removed; the returned
/// ring's first and last points coincide.
///
/// # Errors
///
/// Returns [`GeometryDomainError::Degenerate`] if either curve is empty.
pub fn assemble_profile(
    outer: &ProfileCurve,
    inner: Option<&ProfileCurve>,
) -> Result<AssembledProfile> {
    if outer.is_empty() {
        return Err(
            GeometryDomainError::Degenerate("cannot assemble an empty outer curve".to_owned())
                .into(),
        );
    }

    let mut ring: Vec<Point2> = outer.points().to_vec();

    if let Some(inner) = inner {
        if inner.is_empty() {
            return Err(GeometryDomainError::Degenerate(
                "cannot assemble an empty inner curve".to_owned(),
            )
            .into());
        }
        ring.extend(inner.reversed().into_points());
    } else if let Some(&last) = ring.last() {
        if last.y.abs() > TOLERANCE {
            ring.push(Point2::new(last.x, 0.0));
        }
    }

    let mut ring = dedup_consecutive(&ring, TOLERANCE);
    let first = ring[0];
    ring.push(first);

    Ok(AssembledProfile::from_ring(ring))
}
