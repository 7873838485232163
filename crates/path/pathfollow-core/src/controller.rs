//! Playback controller: mediates between host UI state and a `Player`.
//!
//! The host is reached only through `PlaybackHost`, so the core never touches
//! scene objects or widgets directly.

use crate::curve::CurveMode;
use crate::inputs::PlaybackCommand;
use crate::outputs::{Outputs, Pose};
use crate::player::Player;

/// Capabilities a host (engine adapter, test harness) provides to the controller.
pub trait PlaybackHost {
    /// Apply the pose to the followed object.
    fn set_pose(&mut self, pose: &Pose);
    /// Current state of the host's pause toggle.
    fn is_paused(&self) -> bool;
    /// Whether the host's toggle for `mode` is switched on.
    fn is_mode_enabled(&self, mode: CurveMode) -> bool;
}

/// Drives a `Player` from a `PlaybackHost`, once per frame.
#[derive(Debug)]
pub struct PlaybackController<H> {
    player: Player,
    host: H,
    /// Host pause toggle as seen on the previous frame.
    host_paused: Option<bool>,
}

impl<H: PlaybackHost> PlaybackController<H> {
    pub fn new(player: Player, host: H) -> Self {
        Self {
            player,
            host,
            host_paused: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (Player, H) {
        (self.player, self.host)
    }

    /// Switch curve basis if the host has it enabled and it is not already
    /// active. Returns whether the mode changed.
    pub fn select_mode(&mut self, mode: CurveMode) -> bool {
        if !self.host.is_mode_enabled(mode) {
            log::debug!("ignoring switch to {mode}: disabled by host");
            return false;
        }
        self.player.select_mode(mode)
    }

    /// Set the shared pause flag directly (for hosts that push events).
    /// It holds until the host toggle next changes.
    pub fn set_paused(&mut self, paused: bool) {
        self.player.set_paused(paused);
    }

    pub fn progress_fraction(&self) -> f32 {
        self.player.progress_fraction()
    }

    /// Apply queued commands in order.
    pub fn apply<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = PlaybackCommand>,
    {
        for cmd in commands {
            match cmd {
                PlaybackCommand::SelectMode(mode) => {
                    self.select_mode(mode);
                }
                PlaybackCommand::SetPaused(paused) => self.set_paused(paused),
            }
        }
    }

    /// One frame: pick up a changed host pause toggle, step the player, hand
    /// the pose back.
    pub fn frame(&mut self, dt: f32) -> &Outputs {
        let host_paused = self.host.is_paused();
        if self.host_paused != Some(host_paused) {
            self.host_paused = Some(host_paused);
            self.player.set_paused(host_paused);
        }
        let outputs = self.player.update(dt);
        self.host.set_pose(&outputs.pose);
        outputs
    }
}
