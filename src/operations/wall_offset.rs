use crate::error::{ConfigurationError, GeometryDomainError, Result};
use crate::geometry::ProfileCurve;
use crate::math::intersect_2d::{line_line_intersect_2d, point_at, segment_segment_intersect_2d};
use crate::math::polyline_2d::{dedup_consecutive, left_normal, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// When `cos(angle between consecutive segments) < this`, use a flat cap
/// instead of a miter join. Only for near-180° reversals (> ~169°).
const FLAT_CAP_COS: f64 = -0.98;

/// Maximum miter distance as a multiple of the offset distance. When the
/// miter extends further than this, a bevel (two points) is used instead.
/// A limit of 4.0 clips at ~30° turn angles (matches SVG default).
const MITER_LIMIT: f64 = 4.0;

/// Tolerance for collapsing near-duplicate vertices before offsetting.
const DEDUP_TOLERANCE: f64 = 1e-9;

/// Derives the inner surface of a hollow profile by offsetting the outer
/// generator curve.
///
/// The outer curve runs tip→rear with the material side toward the axis, so
/// the inner surface is the one-sided parallel offset at perpendicular
/// distance `thickness` on the right of the walking direction. Joins are
/// mitered, falling back to a bevel past the miter limit and to a flat cap
/// at near-reversals; the policy is fixed for a build.
///
/// Offsetting a region whose curvature radius is below `thickness` (the
/// nose cap) folds the raw offset into loops; those are trimmed at their
/// self-intersections. Points left below the axis (`y < 0`) are a known
/// artifact of offsetting a curve that approaches the centerline and are
/// discarded — but only from the ends of the curve. Interior excursions
/// below the axis mean the offset split into disjoint pieces, which is
/// reported as a [`GeometryDomainError::OffsetTopology`].
#[derive(Debug)]
pub struct WallOffset2D {
    outer: Vec<Point2>,
    thickness: f64,
}

impl WallOffset2D {
    /// Creates a new wall offset operation.
    #[must_use]
    pub fn new(outer: &ProfileCurve, thickness: f64) -> Self {
        Self {
            outer: outer.points().to_vec(),
            thickness,
        }
    }

    /// Executes the offset, returning the inner surface curve (tip→rear
    /// order, like the outer curve).
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NonPositiveParameter`] if the thickness is
    ///   not positive (the solid case never reaches this operation).
    /// - [`GeometryDomainError::Degenerate`] if fewer than 2 distinct outer
    ///   points remain to offset.
    /// - [`GeometryDomainError::OffsetTopology`] if the offset collapses or
    ///   splits into pieces the assembler cannot stitch.
    pub fn execute(&self) -> Result<ProfileCurve> {
        if self.thickness <= 0.0 {
            return Err(ConfigurationError::NonPositiveParameter {
                parameter: "wall_thickness",
                value: self.thickness,
            }
            .into());
        }

        let points = dedup_consecutive(&self.outer, DEDUP_TOLERANCE);
        if points.len() < 2 {
            return Err(GeometryDomainError::Degenerate(
                "at least 2 distinct points are required for a wall offset".to_owned(),
            )
            .into());
        }

        // Right-side offset = left-normal convention with negated distance.
        let raw = build_one_side_offset(&points, -self.thickness)?;
        let trimmed = trim_open_loops(raw);
        let above_axis = trim_below_axis(&trimmed)?;
        let inner = dedup_consecutive(&above_axis, DEDUP_TOLERANCE);

        if inner.len() < 2 {
            return Err(GeometryDomainError::OffsetTopology(format!(
                "inner surface collapsed to {} point(s) at thickness {}",
                inner.len(),
                self.thickness
            ))
            .into());
        }

        Ok(ProfileCurve::new(inner))
    }
}

/// Builds the one-sided raw offset of an open polyline (signed distance,
/// positive = left of the walking direction).
fn build_one_side_offset(points: &[Point2], distance: f64) -> Result<Vec<Point2>> {
    let n = points.len();
    let segment_count = n - 1;

    // Phase A: offset each segment perpendicular to its direction.
    let mut offset_segments: Vec<(Point2, Point2)> = Vec::with_capacity(segment_count);
    let mut directions: Vec<Vector2> = Vec::with_capacity(segment_count);

    for i in 0..segment_count {
        let dir = segment_direction(&points[i], &points[i + 1]).ok_or_else(|| {
            GeometryDomainError::Degenerate(format!(
                "zero-length segment at ({}, {})",
                points[i].x, points[i].y
            ))
        })?;
        let offset = left_normal(dir) * distance;

        let a = Point2::new(points[i].x + offset.x, points[i].y + offset.y);
        let b = Point2::new(points[i + 1].x + offset.x, points[i + 1].y + offset.y);
        offset_segments.push((a, b));
        directions.push(dir);
    }

    // Phase B: build the raw polyline by joining consecutive offset segments.
    let mut raw = Vec::with_capacity(n * 2);
    raw.push(offset_segments[0].0);

    for i in 1..segment_count {
        push_corner(
            &mut raw,
            &offset_segments[i - 1],
            &offset_segments[i],
            &directions[i - 1],
            &directions[i],
            &points[i],
            distance,
        );
    }

    raw.push(offset_segments[segment_count - 1].1);
    Ok(raw)
}

/// Pushes corner point(s) into `raw`.
///
/// - Near-antiparallel segments: flat cap (two points).
/// - Miter exceeding `MITER_LIMIT`: bevel (two points).
/// - Normal corners: single miter intersection point.
fn push_corner(
    raw: &mut Vec<Point2>,
    seg_prev: &(Point2, Point2),
    seg_next: &(Point2, Point2),
    dir_prev: &Vector2,
    dir_next: &Vector2,
    original_corner: &Point2,
    distance: f64,
) {
    let cos_angle = dir_prev.x * dir_next.x + dir_prev.y * dir_next.y;

    if cos_angle < FLAT_CAP_COS {
        raw.push(seg_prev.1);
        raw.push(seg_next.0);
        return;
    }

    let corner = intersect_offset_lines(seg_prev, seg_next, original_corner, distance);
    let dx = corner.x - original_corner.x;
    let dy = corner.y - original_corner.y;
    let limit = MITER_LIMIT * distance.abs();

    if dx * dx + dy * dy > limit * limit {
        raw.push(seg_prev.1);
        raw.push(seg_next.0);
    } else {
        raw.push(corner);
    }
}

/// Intersects two offset lines and returns the corner point.
///
/// Falls back to shifting the original corner if the lines are parallel.
fn intersect_offset_lines(
    seg_prev: &(Point2, Point2),
    seg_next: &(Point2, Point2),
    original_corner: &Point2,
    distance: f64,
) -> Point2 {
    let d_prev = Vector2::new(seg_prev.1.x - seg_prev.0.x, seg_prev.1.y - seg_prev.0.y);
    let d_next = Vector2::new(seg_next.1.x - seg_next.0.x, seg_next.1.y - seg_next.0.y);

    if let Some((t, _u)) = line_line_intersect_2d(&seg_prev.1, &d_prev, &seg_next.0, &d_next) {
        point_at(&seg_prev.1, &d_prev, t)
    } else {
        let normal = left_normal(
            d_prev
                .try_normalize(TOLERANCE)
                .unwrap_or(Vector2::new(1.0, 0.0)),
        );
        Point2::new(
            original_corner.x + normal.x * distance,
            original_corner.y + normal.y * distance,
        )
    }
}

/// Removes self-intersection loops from an open polyline.
///
/// At each first-found crossing between non-adjacent segments, the interior
/// loop is spliced out and replaced with the intersection point. Convergence
/// is guaranteed because each splice strictly reduces the vertex count.
fn trim_open_loops(points: Vec<Point2>) -> Vec<Point2> {
    let mut pts = points;
    while let Some((i, j, pt)) = find_first_self_intersection(&pts) {
        let mut next = Vec::with_capacity(pts.len() - (j - i) + 1);
        next.extend_from_slice(&pts[..=i]);
        next.push(pt);
        next.extend_from_slice(&pts[j + 1..]);
        pts = next;
    }
    pts
}

/// Finds the first crossing between non-adjacent segments of an open
/// polyline.
///
/// Endpoint-to-endpoint touches (both parameters at a segment end) are
/// skipped; only genuine crossings are reported. Returns `(i, j, point)`
/// with `i < j` segment indices.
fn find_first_self_intersection(points: &[Point2]) -> Option<(usize, usize, Point2)> {
    let n = points.len();
    if n < 4 {
        return None;
    }
    let eps = TOLERANCE * 100.0;
    for i in 0..n - 1 {
        for j in (i + 2)..n - 1 {
            if let Some((pt, t, u)) = segment_segment_intersect_2d(
                &points[i],
                &points[i + 1],
                &points[j],
                &points[j + 1],
            ) {
                let t_at_end = t < eps || t > 1.0 - eps;
                let u_at_end = u < eps || u > 1.0 - eps;
                if t_at_end && u_at_end {
                    continue;
                }
                return Some((i, j, pt));
            }
        }
    }
    None
}

/// Discards points below the axis (`y < 0`).
///
/// Removal is only legal at the ends of the curve; an interior excursion
/// below the axis means the offset split into disjoint pieces.
fn trim_below_axis(points: &[Point2]) -> Result<Vec<Point2>> {
    let first_kept = points.iter().position(|p| p.y >= 0.0);
    let Some(first) = first_kept else {
        return Err(GeometryDomainError::OffsetTopology(
            "inner surface lies entirely below the axis".to_owned(),
        )
        .into());
    };
    let last = points
        .iter()
        .rposition(|p| p.y >= 0.0)
        .unwrap_or(first);

    let kept = &points[first..=last];
    if let Some(below) = kept.iter().find(|p| p.y < 0.0) {
        return Err(GeometryDomainError::OffsetTopology(format!(
            "inner surface dips below the axis mid-curve at ({}, {})",
            below.x, below.y
        ))
        .into());
    }
    Ok(kept.to_vec())
}
