//! Segment appenders: pure extensions of the running outer curve.
//!
//! Each appender takes the current curve and its own parameters and returns
//! the curve extended by new points. They execute in a fixed order —
//! straight, cannelure, boat tail, shoulder — and trust the incoming
//! curve's last point as the anchor; none re-validate earlier geometry.

mod boat_tail;
mod cannelure;
mod shoulder;
mod straight;

pub use boat_tail::append_boat_tail;
pub use cannelure::append_cannelure;
pub use shoulder::append_shoulder;
pub use straight::append_straight;
