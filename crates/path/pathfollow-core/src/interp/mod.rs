//! Orientation interpolation.
//!
//! Control-point rotations are authored as Euler triples and stored as
//! quaternions; playback blends neighbouring rotations with shortest-arc SLERP.

pub mod functions;

pub use functions::{euler_to_quat, normalize4, slerp_quat};
