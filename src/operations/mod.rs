pub mod assemble;
pub mod build;
pub mod segments;
pub mod wall_offset;

pub use assemble::assemble_profile;
pub use build::{BuiltProfile, ProfileBuilder};
pub use wall_offset::WallOffset2D;
