//! Path data model: control points, paths and the ordered path set.
//!
//! All of it is immutable once built; playback only reads it.

use serde::Serialize;

use crate::error::PathError;

/// Minimum control points for the cubic bases to see four distinct neighbours.
pub const MIN_ARTISTIC_POINTS: usize = 4;

/// An authored anchor: position plus unit-quaternion orientation (x, y, z, w).
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct ControlPoint {
    pub position: [f32; 3],
    pub orientation: [f32; 4],
}

/// A closed path: the last control point connects back to the first.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Path {
    points: Vec<ControlPoint>,
    span: f32,
}

impl Path {
    /// Build a path, checking the invariants every evaluator relies on
    /// (non-empty, finite positive span, finite coordinates).
    pub fn new(points: Vec<ControlPoint>, span: f32) -> Result<Self, PathError> {
        if points.is_empty() {
            return Err(PathError::InvalidPath {
                reason: "a path needs at least one control point".into(),
            });
        }
        if !span.is_finite() || span <= 0.0 {
            return Err(PathError::InvalidPath {
                reason: format!("span must be finite and > 0, got {span}"),
            });
        }
        let finite = points.iter().all(|p| {
            p.position.iter().all(|c| c.is_finite()) && p.orientation.iter().all(|c| c.is_finite())
        });
        if !finite {
            return Err(PathError::InvalidPath {
                reason: "control point components must be finite".into(),
            });
        }
        Ok(Self { points, span })
    }

    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Control point at `index`, wrapping around the closed path.
    #[inline]
    pub fn point(&self, index: usize) -> &ControlPoint {
        &self.points[index % self.points.len()]
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Total time to traverse the path once.
    #[inline]
    pub fn span(&self) -> f32 {
        self.span
    }

    /// Time spent on each segment; segments are uniform.
    #[inline]
    pub fn segment_duration(&self) -> f32 {
        self.span / self.points.len() as f32
    }
}

/// Paths in authored order, which is also playback order.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}

impl From<Vec<Path>> for PathSet {
    fn from(paths: Vec<Path>) -> Self {
        Self::new(paths)
    }
}

impl std::ops::Index<usize> for PathSet {
    type Output = Path;

    fn index(&self, index: usize) -> &Path {
        &self.paths[index]
    }
}
