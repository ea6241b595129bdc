use crate::error::{Result, ShapeMismatchError};
use crate::math::Point2;

/// Converts an untyped numeric row matrix into typed points.
///
/// # Errors
///
/// Returns [`ShapeMismatchError`] for the first row that is not exactly
/// 2 wide; collaborators exchanging raw arrays surface this immediately
/// rather than consuming a misoriented matrix.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Vec<Point2>> {
    rows.iter()
        .enumerate()
        .map(|(row, values)| {
            if values.len() == 2 {
                Ok(Point2::new(values[0], values[1]))
            } else {
                Err(ShapeMismatchError {
                    row,
                    width: values.len(),
                }
                .into())
            }
        })
        .collect()
}

/// Converts typed points back into an N×2 row matrix.
#[must_use]
pub fn rows_from_points(points: &[Point2]) -> Vec<Vec<f64>> {
    points.iter().map(|p| vec![p.x, p.y]).collect()
}
