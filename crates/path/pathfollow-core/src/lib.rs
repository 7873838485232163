//! Pathfollow Core (engine-agnostic)
//!
//! Moves an object along authored closed paths: spline positions (Catmull-Rom or
//! uniform cubic B-spline), SLERP orientations between control points, and
//! looping playback across an ordered set of paths. Hosts supply elapsed time
//! through `Player::tick` or a `PlaybackController` and apply the returned pose.

pub mod config;
pub mod controller;
pub mod curve;
pub mod data;
pub mod error;
pub mod inputs;
pub mod interp;
pub mod outputs;
pub mod parse;
pub mod player;

// Re-exports for consumers (adapters)
pub use config::{AngleUnit, Config, WrapPolicy};
pub use controller::{PlaybackController, PlaybackHost};
pub use curve::CurveMode;
pub use data::{ControlPoint, Path, PathSet};
pub use error::PathError;
pub use inputs::PlaybackCommand;
pub use outputs::{progress_label, Outputs, PlaybackEvent, Pose};
pub use parse::{parse_path_config, parse_path_config_with, parse_path_lines};
pub use player::{PlaybackState, Player};
