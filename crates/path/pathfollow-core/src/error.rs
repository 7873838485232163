//! Error types for path loading and playback.

/// Errors surfaced by pathfollow-core. All of them happen at load time;
/// per-tick evaluation cannot fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    /// A path config could not be parsed. `line` is 1-based; for truncated
    /// input it points one past the last line.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A path built in code violated the path invariants.
    #[error("invalid path: {reason}")]
    InvalidPath { reason: String },

    /// A player needs at least one path.
    #[error("path set is empty")]
    EmptyPathSet,
}

impl PathError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } | Self::InvalidPath { .. } => "parse",
            Self::EmptyPathSet => "playback",
        }
    }
}
