//! Curve evaluators for path positions.
//!
//! Two interchangeable cubic bases over four neighbouring control points:
//! - Catmull-Rom: interpolating, passes through `p[seg]` at u=0 and `p[seg+1]` at u=1.
//! - Uniform cubic B-spline ("Bezier" in authoring UIs): approximating, C² smooth.
//!
//! All indexing is modulo the path's point count, so the curve closes on itself.

use serde::{Deserialize, Serialize};

use crate::data::Path;

/// Curve basis used to place the object along the active path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    CatmullRom,
    Bezier,
}

impl CurveMode {
    /// Stable display name.
    pub fn name(self) -> &'static str {
        match self {
            CurveMode::CatmullRom => "catmull_rom",
            CurveMode::Bezier => "bezier",
        }
    }

    /// Position on `path` within segment `seg` at local fraction `u`.
    #[inline]
    pub fn evaluate(self, path: &Path, seg: usize, u: f32) -> [f32; 3] {
        match self {
            CurveMode::CatmullRom => catmull_rom(path, seg, u),
            CurveMode::Bezier => bspline(path, seg, u),
        }
    }
}

impl std::fmt::Display for CurveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Catmull-Rom blending weights for `[p(seg-1), p(seg), p(seg+1), p(seg+2)]`.
#[inline]
pub fn catmull_rom_weights(u: f32) -> [f32; 4] {
    let usq = u * u;
    let ucb = usq * u;
    [
        0.5 * (-ucb + 2.0 * usq - u),
        0.5 * (3.0 * ucb - 5.0 * usq + 2.0),
        0.5 * (-3.0 * ucb + 4.0 * usq + u),
        0.5 * (ucb - usq),
    ]
}

/// Uniform cubic B-spline blending weights for `[p(seg), .., p(seg+3)]`.
#[inline]
pub fn bspline_weights(u: f32) -> [f32; 4] {
    let v = 1.0 - u;
    let usq = u * u;
    let ucb = usq * u;
    const SIXTH: f32 = 1.0 / 6.0;
    [
        SIXTH * v * v * v,
        SIXTH * (3.0 * ucb - 6.0 * usq + 4.0),
        SIXTH * (-3.0 * ucb + 3.0 * usq + 3.0 * u + 1.0),
        SIXTH * ucb,
    ]
}

#[inline]
fn blend(p: [[f32; 3]; 4], w: [f32; 4]) -> [f32; 3] {
    let mut out = [0.0f32; 3];
    for (axis, o) in out.iter_mut().enumerate() {
        *o = p[0][axis] * w[0] + p[1][axis] * w[1] + p[2][axis] * w[2] + p[3][axis] * w[3];
    }
    out
}

/// Positions of four consecutive control points starting at `first` (wrapping).
#[inline]
fn window(path: &Path, first: usize) -> [[f32; 3]; 4] {
    [
        path.point(first).position,
        path.point(first + 1).position,
        path.point(first + 2).position,
        path.point(first + 3).position,
    ]
}

/// Catmull-Rom position for segment `seg` at `u ∈ [0, 1]`.
pub fn catmull_rom(path: &Path, seg: usize, u: f32) -> [f32; 3] {
    let n = path.point_count();
    // seg - 1, without underflow at seg = 0
    let first = seg % n + n - 1;
    blend(window(path, first), catmull_rom_weights(u))
}

/// B-spline position for segment `seg` at `u ∈ [0, 1]`.
pub fn bspline(path: &Path, seg: usize, u: f32) -> [f32; 3] {
    blend(window(path, seg), bspline_weights(u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_partition_unity() {
        for i in 0..=10 {
            let u = i as f32 / 10.0;
            let cr: f32 = catmull_rom_weights(u).iter().sum();
            let bs: f32 = bspline_weights(u).iter().sum();
            assert!((cr - 1.0).abs() < 1e-6, "catmull-rom sum {cr} at u={u}");
            assert!((bs - 1.0).abs() < 1e-6, "b-spline sum {bs} at u={u}");
        }
    }

    #[test]
    fn catmull_rom_weights_match_horner_form() {
        // 0.5 * [(-u + 2u² - u³), (2 - 5u² + 3u³), (u + 4u² - 3u³), (u³ - u²)]
        for i in 0..=8 {
            let u = i as f32 / 8.0;
            let w = catmull_rom_weights(u);
            let horner = [
                0.5 * (u * (u * (2.0 - u) - 1.0)),
                0.5 * (u * u * (3.0 * u - 5.0) + 2.0),
                0.5 * (u * (u * (4.0 - 3.0 * u) + 1.0)),
                0.5 * (u * u * (u - 1.0)),
            ];
            for k in 0..4 {
                assert!((w[k] - horner[k]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn catmull_rom_endpoint_weights() {
        assert_eq!(catmull_rom_weights(0.0), [0.0, 1.0, 0.0, 0.0]);
        let w1 = catmull_rom_weights(1.0);
        assert!(w1[0].abs() < 1e-7 && w1[1].abs() < 1e-7 && w1[3].abs() < 1e-7);
        assert!((w1[2] - 1.0).abs() < 1e-7);
    }

    #[test]
    fn mode_names() {
        assert_eq!(CurveMode::CatmullRom.to_string(), "catmull_rom");
        assert_eq!(CurveMode::Bezier.name(), "bezier");
    }
}
