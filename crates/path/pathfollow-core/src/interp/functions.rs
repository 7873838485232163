//! Interpolation helpers:
//! - lerp_f32 / lerp_vec4 (component-wise)
//! - euler_to_quat (Z-Y-X half-angle products)
//! - slerp_quat (shortest-arc spherical interpolation with NLERP fallback)
//!
//! Quaternions are stored as `[x, y, z, w]`.

use crate::config::AngleUnit;

/// Above this cosine the two rotations are treated as parallel and NLERP is used.
pub const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
fn scale4(q: [f32; 4], s: f32) -> [f32; 4] {
    [q[0] * s, q[1] * s, q[2] * s, q[3] * s]
}

#[inline]
fn sub_vec4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
}

#[inline]
fn add_vec4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

/// Normalize a 4-vector. Zero-length input is returned unchanged.
#[inline]
pub fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Convert Euler angles (rotation about x, y, z) into a quaternion `[x, y, z, w]`.
///
/// Composition is yaw (z) outermost, then pitch (y), then roll (x):
/// `q = qz * qy * qx`. With `AngleUnit::Degrees` the inputs are converted to
/// radians before the half-angle products are taken.
pub fn euler_to_quat(euler: [f32; 3], unit: AngleUnit) -> [f32; 4] {
    let [x, y, z] = match unit {
        AngleUnit::Degrees => [
            euler[0].to_radians(),
            euler[1].to_radians(),
            euler[2].to_radians(),
        ],
        AngleUnit::Radians => euler,
    };

    let (sz, cz) = (z * 0.5).sin_cos();
    let (sx, cx) = (x * 0.5).sin_cos();
    let (sy, cy) = (y * 0.5).sin_cos();

    [
        cz * sx * cy - sz * cx * sy,
        cz * cx * sy + sz * sx * cy,
        sz * cx * cy - cz * sx * sy,
        cz * cx * cy + sz * sx * sy,
    ]
}

/// Spherical linear interpolation between two rotations.
///
/// Inputs are normalized first. The second quaternion is flipped when the pair
/// lies on opposite hemispheres so the result always follows the shorter arc;
/// nearly parallel pairs fall back to NLERP.
pub fn slerp_quat(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let a = normalize4(a);
    let mut b = normalize4(b);

    let mut dot = dot4(a, b);
    if dot < 0.0 {
        b = scale4(b, -1.0);
        dot = -dot;
    }

    if dot > SLERP_DOT_THRESHOLD {
        return normalize4(lerp_vec4(a, b, t));
    }

    let dot = dot.clamp(-1.0, 1.0);
    let theta_0 = dot.acos();
    let theta = theta_0 * t;

    // {a, c} spans the rotation plane.
    let c = normalize4(sub_vec4(b, scale4(a, dot)));
    let (s, co) = theta.sin_cos();
    add_vec4(scale4(a, co), scale4(c, s))
}

/// Angle of the rotation that takes `a` to `b`, in radians, in `[0, π]`.
pub fn quat_angle_between(a: [f32; 4], b: [f32; 4]) -> f32 {
    let d = dot4(normalize4(a), normalize4(b)).abs().clamp(0.0, 1.0);
    2.0 * d.acos()
}
