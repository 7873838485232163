//! Core configuration for pathfollow-core.

use serde::{Deserialize, Serialize};

use crate::curve::CurveMode;

/// Unit of the Euler triples stored in a path config.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// What happens to elapsed time when it reaches the end of a path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapPolicy {
    /// Carry the overshoot into the next path.
    #[default]
    SubtractSpan,
    /// Drop the overshoot and start the next path at zero.
    Reset,
}

/// Parsing and playback settings.
/// Keep this minimal; every field has a default so partial JSON is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Curve basis selected when a player starts. `None` leaves the player
    /// uninitialized until the first `select_mode`.
    pub initial_mode: Option<CurveMode>,
    pub wrap: WrapPolicy,
    pub angle_unit: AngleUnit,
    /// Records whose first non-blank character is this marker are skipped.
    pub comment_marker: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_mode: Some(CurveMode::CatmullRom),
            wrap: WrapPolicy::SubtractSpan,
            angle_unit: AngleUnit::Degrees,
            comment_marker: '#',
        }
    }
}
