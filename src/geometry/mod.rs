pub mod parameters;
pub mod profile;
pub mod tangency;

pub use parameters::{BoatTail, ProfileParameters};
pub use profile::{AssembledProfile, ProfileCurve};
pub use tangency::TangencyGeometry;
