//! Output contracts from the player.
//!
//! Outputs carry the pose for this tick plus the discrete events raised since
//! the previous one. Applying the pose to a scene object is the host's job.

use serde::{Deserialize, Serialize};

use crate::curve::CurveMode;

/// Position and orientation (quaternion x, y, z, w) of the followed object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: [f32; 3],
    pub orientation: [f32; 4],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Discrete signals emitted during playback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PlaybackEvent {
    /// Elapsed time ran past the end of path `from` and playback landed on
    /// path `to`. `crossings` counts every path end passed during the tick.
    PathAdvanced {
        from: usize,
        to: usize,
        crossings: u64,
    },
    /// Curve basis changed and path progress restarted.
    ModeSelected { mode: CurveMode },
    Paused,
    Resumed,
}

/// Outputs returned by `Player::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    pub pose: Pose,
    #[serde(default)]
    pub events: Vec<PlaybackEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: PlaybackEvent) {
        self.events.push(event);
    }
}

/// Format a progress fraction as a percentage label, e.g. `"07.50%"`.
pub fn progress_label(fraction: f32) -> String {
    format!("{:05.2}%", 100.0 * fraction)
}
