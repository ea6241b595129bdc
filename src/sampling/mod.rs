mod nose_arc;
mod ogive;

pub use nose_arc::sample_nose_arc;
pub use ogive::sample_ogive;
