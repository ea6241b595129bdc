use std::io::{self, Write};

use crate::geometry::AssembledProfile;

/// Writes the profile as CSV: header `X,Y`, one row per ring point, in the
/// assembled point order. The sink is any [`Write`]; callers own file
/// handling.
///
/// # Errors
///
/// Propagates I/O errors from the sink.
pub fn write_csv<W: Write>(writer: &mut W, profile: &AssembledProfile) -> io::Result<()> {
    writeln!(writer, "X,Y")?;
    for p in profile.points() {
        writeln!(writer, "{},{}", p.x, p.y)?;
    }
    Ok(())
}
