//! Input contracts for the playback controller.
//!
//! Hosts translate UI events (toggle clicks, key presses) into commands and
//! hand them to `PlaybackController::apply` before the next frame.

use serde::{Deserialize, Serialize};

use crate::curve::CurveMode;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PlaybackCommand {
    /// Switch curve basis; ignored when already active or disabled by the host.
    SelectMode(CurveMode),
    SetPaused(bool),
}
