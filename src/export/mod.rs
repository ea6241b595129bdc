//! Collaborator-facing surfaces: CSV and OpenSCAD writers, plot data, and
//! the raw N×2 matrix adapter. All of them consume a finished
//! [`crate::geometry::AssembledProfile`] (or [`crate::operations::BuiltProfile`])
//! and never reach back into the pipeline.

pub mod csv;
pub mod matrix;
pub mod plot;
pub mod scad;

pub use csv::write_csv;
pub use matrix::{points_from_rows, rows_from_points};
pub use plot::{NoseCircle, PlotData};
pub use scad::write_scad;
