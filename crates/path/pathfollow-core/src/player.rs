//! Player: owns the path set and playback state, produces a pose per tick.
//!
//! Time math:
//! - `adj = elapsed * point_count / span`, `segment = floor(adj)`, `u = adj - segment`
//! - every segment lasts `span / point_count`
//! - reaching `span` moves playback to the next path (cyclically), carrying the
//!   overshoot or dropping it according to `WrapPolicy`

use serde::{Deserialize, Serialize};

use crate::config::{Config, WrapPolicy};
use crate::curve::CurveMode;
use crate::data::{Path, PathSet};
use crate::error::PathError;
use crate::interp::slerp_quat;
use crate::outputs::{Outputs, PlaybackEvent, Pose};

/// Mutable playback state. Transitions are pure: `advance` returns a new state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Index of the active path within the path set.
    pub path_index: usize,
    /// Time into the active path, in `[0, span)`.
    pub elapsed: f32,
    /// Active curve basis; `None` until one has been selected.
    pub mode: Option<CurveMode>,
    pub paused: bool,
}

impl PlaybackState {
    pub fn new(mode: Option<CurveMode>) -> Self {
        Self {
            path_index: 0,
            elapsed: 0.0,
            mode,
            paused: false,
        }
    }

    /// Advance elapsed time by `dt` (ignored while paused), moving across path
    /// boundaries as needed. Returns the new state and at most one
    /// `PathAdvanced` event summarising the transitions taken.
    ///
    /// Negative or non-finite deltas are treated as zero; time only moves forward.
    /// Whole laps of the path set are folded out in `f64`, so the work per call
    /// is bounded by the number of paths however large `dt` gets.
    pub fn advance(
        &self,
        paths: &PathSet,
        wrap: WrapPolicy,
        dt: f32,
    ) -> (PlaybackState, Vec<PlaybackEvent>) {
        let mut next = *self;
        let mut events = Vec::new();
        if next.paused || paths.is_empty() || !dt.is_finite() || dt <= 0.0 {
            return (next, events);
        }

        let len = paths.len();
        let from = next.path_index % len;
        let span_of = |idx: usize| f64::from(paths[idx].span());
        let mut idx = from;
        let mut rem = f64::from(next.elapsed) + f64::from(dt);
        let mut crossings: u64 = 0;

        if rem >= span_of(idx) {
            match wrap {
                WrapPolicy::Reset => {
                    rem = 0.0;
                    idx = (idx + 1) % len;
                    crossings = 1;
                }
                WrapPolicy::SubtractSpan => {
                    let lap: f64 = (0..len).map(span_of).sum();
                    // fmod is exact, so the remainder is in [0, lap)
                    let folded = rem % lap;
                    crossings = ((rem - folded) / lap).round() as u64 * len as u64;
                    rem = folded;
                    for _ in 0..len {
                        let span = span_of(idx);
                        if rem < span {
                            break;
                        }
                        rem -= span;
                        idx = (idx + 1) % len;
                        crossings += 1;
                    }
                }
            }
        }

        next.elapsed = rem as f32;
        if next.elapsed >= paths[idx].span() {
            // rounded up onto the boundary
            next.elapsed = 0.0;
            idx = (idx + 1) % len;
            crossings += 1;
        }
        next.path_index = idx;

        if crossings > 0 {
            log::debug!("crossed {crossings} path end(s): path {from} -> path {idx}");
            events.push(PlaybackEvent::PathAdvanced {
                from,
                to: idx,
                crossings,
            });
        }
        (next, events)
    }

    /// Segment index (already wrapped to the point count) and local fraction
    /// `u ∈ [0, 1)` on `path`.
    pub fn segment(&self, path: &Path) -> (usize, f32) {
        let n = path.point_count();
        let adj = (self.elapsed * n as f32 / path.span()).clamp(0.0, n as f32);
        let seg = adj.floor();
        let u = (adj - seg).clamp(0.0, 1.0);
        ((seg as usize) % n, u)
    }

    /// Evaluate the pose on the active path.
    ///
    /// Without a selected mode the position holds at the segment's start point.
    pub fn pose(&self, paths: &PathSet) -> Pose {
        let Some(path) = paths.get(self.path_index) else {
            return Pose::default();
        };
        let (seg, u) = self.segment(path);
        log::trace!("path {} segment {seg} u={u:.4}", self.path_index);

        let position = match self.mode {
            Some(mode) => mode.evaluate(path, seg, u),
            None => path.point(seg).position,
        };
        let orientation = slerp_quat(
            path.point(seg).orientation,
            path.point(seg + 1).orientation,
            u,
        );
        Pose {
            position,
            orientation,
        }
    }

    /// Fraction of the active path completed, in `[0, 1)`.
    pub fn progress_fraction(&self, paths: &PathSet) -> f32 {
        match paths.get(self.path_index) {
            Some(path) => (self.elapsed / path.span()).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

/// Owner of a path set and its playback state.
#[derive(Debug)]
pub struct Player {
    cfg: Config,
    paths: PathSet,
    state: PlaybackState,
    /// Events raised by commands between ticks; flushed into the next `update`.
    pending: Vec<PlaybackEvent>,
    outputs: Outputs,
}

impl Player {
    /// Create a player positioned at the start of the first path.
    pub fn new(paths: PathSet, cfg: Config) -> Result<Self, PathError> {
        if paths.is_empty() {
            return Err(PathError::EmptyPathSet);
        }
        let state = PlaybackState::new(cfg.initial_mode);
        let outputs = Outputs {
            pose: state.pose(&paths),
            events: Vec::new(),
        };
        Ok(Self {
            cfg,
            paths,
            state,
            pending: Vec::new(),
            outputs,
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_path(&self) -> &Path {
        &self.paths[self.state.path_index]
    }

    pub fn mode(&self) -> Option<CurveMode> {
        self.state.mode
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Last computed pose (kept while paused).
    pub fn pose(&self) -> Pose {
        self.outputs.pose
    }

    pub fn progress_fraction(&self) -> f32 {
        self.state.progress_fraction(&self.paths)
    }

    /// Switch curve basis. No-op when `mode` is already active; otherwise
    /// restarts progress on the current path. Returns whether anything changed.
    pub fn select_mode(&mut self, mode: CurveMode) -> bool {
        if self.state.mode == Some(mode) {
            return false;
        }
        self.state.mode = Some(mode);
        self.state.elapsed = 0.0;
        log::debug!("curve mode set to {mode}");
        self.pending.push(PlaybackEvent::ModeSelected { mode });
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.state.paused == paused {
            return;
        }
        self.state.paused = paused;
        log::debug!("playback {}", if paused { "paused" } else { "resumed" });
        self.pending.push(if paused {
            PlaybackEvent::Paused
        } else {
            PlaybackEvent::Resumed
        });
    }

    /// Step playback by `dt` and evaluate the pose.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear_events();
        for event in self.pending.drain(..) {
            self.outputs.push_event(event);
        }

        let (next, events) = self.state.advance(&self.paths, self.cfg.wrap, dt);
        self.state = next;
        for event in events {
            self.outputs.push_event(event);
        }
        self.outputs.pose = self.state.pose(&self.paths);
        &self.outputs
    }

    /// `update` reduced to the pose.
    pub fn tick(&mut self, dt: f32) -> Pose {
        self.update(dt).pose
    }
}
