//! Tolerance constants and the small rotation-matrix helper shared across the engine.
//!
//! Policy
//! - Defaults are fixed constants to avoid "tolerance juggling" during normal
//!   development. Two distinct epsilons exist because they answer different
//!   questions: `FACE_EPS` decides what a caller *sees* on a `Face`; `GEOM_EPS`
//!   decides what the polytope core treats as exactly coplanar/degenerate.

use nalgebra::{Matrix3, Vector3};

/// User-visible snapping tolerance applied by `Face::apply_tolerance`.
pub const FACE_EPS: f64 = 1e-6;

/// Internal tolerance for redundancy, coplanarity, and rotation-triviality checks.
pub const GEOM_EPS: f64 = 1e-12;

#[inline]
pub(crate) fn snap(x: f64) -> f64 {
    if x.abs() < FACE_EPS {
        0.0
    } else {
        x
    }
}

/// Rotation `R` mapping `n` onto `+z`, per spec §4.E.5.
///
/// `n` need not be a unit vector. Returns the identity if `n` is already
/// parallel to `+z` or `-z` within `GEOM_EPS` (callers must special-case the
/// `-z` case themselves: the mesh still triangulates clockwise-from-below and
/// must be reversed).
pub(crate) fn face_rotation(n: Vector3<f64>) -> Matrix3<f64> {
    let (u, v, w) = (n.x, n.y, n.z);
    let e_z = Vector3::new(0.0, 0.0, 1.0);
    if n.cross(&e_z).norm() < GEOM_EPS {
        return Matrix3::identity();
    }
    let norm = n.norm();
    let uv = (u * u + v * v).sqrt();

    // Rotate about z so (u,v,0) -> (uv,0,0).
    #[rustfmt::skip]
    let t_xz = Matrix3::new(
        u / uv,  v / uv, 0.0,
        -v / uv, u / uv, 0.0,
        0.0,     0.0,    1.0,
    );
    // Rotate in x-z so the x-axis tilts onto z.
    #[rustfmt::skip]
    let t_z = Matrix3::new(
        w / norm, 0.0, -uv / norm,
        0.0,      1.0, 0.0,
        uv / norm, 0.0, w / norm,
    );
    t_z * t_xz
}
