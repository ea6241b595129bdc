use std::io::{self, Write};

use crate::geometry::AssembledProfile;

/// Writes the profile as an OpenSCAD `rotate_extrude` polygon literal.
///
/// The profile's x-axis is the revolve axis, so the polygon is rotated into
/// `rotate_extrude`'s expected plane. X-coordinates are translated so the
/// first ring point lands at `x = 0`; that translation happens here and
/// nowhere else.
///
/// # Errors
///
/// Propagates I/O errors from the sink.
pub fn write_scad<W: Write>(
    writer: &mut W,
    profile: &AssembledProfile,
    fn_segments: u32,
) -> io::Result<()> {
    writeln!(writer, "$fa = 0.5;")?;
    writeln!(writer, "$fs = 0.5;")?;
    writeln!(writer, "rotate_extrude($fn={fn_segments}){{")?;
    writeln!(writer, "\trotate([0,0,-90]){{")?;
    writeln!(writer, "\t\tpolygon(points=[")?;
    for [x, y] in profile.translated_to_origin() {
        writeln!(writer, "\t\t\t[{x}, {y}],")?;
    }
    writeln!(writer, "\t\t]);")?;
    writeln!(writer, "\t}};")?;
    writeln!(writer, "}};")?;
    Ok(())
}
