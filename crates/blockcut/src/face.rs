//! Bounded half-space value: one face of a [`crate::block::Block`].

use nalgebra::Vector3;

use crate::tolerance::snap;

/// A half-space `n · (x - origin) <= d`, plus inert shear-strength attributes.
///
/// Invariants:
/// - `n` is non-zero.
/// - `d` is measured relative to the owning polytope's local origin, not the
///   world origin (see `Block`).
///
/// Friction and cohesion are carried but never read by the geometry engine;
/// they exist purely so a driver can round-trip them through cuts.
#[derive(Clone, Copy, Debug)]
pub struct Face {
    pub n: Vector3<f64>,
    pub d: f64,
    pub friction: f64,
    pub cohesion: f64,
}

impl Face {
    #[inline]
    pub fn new(n: Vector3<f64>, d: f64, friction: f64, cohesion: f64) -> Self {
        debug_assert!(n.norm() > 0.0, "face normal must be non-zero");
        Self {
            n,
            d,
            friction,
            cohesion,
        }
    }

    /// Returns a copy with every scalar field snapped to zero if `|x| < FACE_EPS`.
    pub fn apply_tolerance(&self) -> Face {
        Face {
            n: Vector3::new(snap(self.n.x), snap(self.n.y), snap(self.n.z)),
            d: snap(self.d),
            friction: snap(self.friction),
            cohesion: snap(self.cohesion),
        }
    }

    /// Value at a point in the owning polytope's local frame.
    #[inline]
    pub fn eval(&self, p: Vector3<f64>) -> f64 {
        self.n.dot(&p)
    }
}

/// Structural equality after tolerance snapping, per spec §4.C.
impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        let a = self.apply_tolerance();
        let b = other.apply_tolerance();
        a.n == b.n && a.d == b.d && a.friction == b.friction && a.cohesion == b.cohesion
    }
}
