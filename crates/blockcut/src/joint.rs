//! Joint value: an oriented cutting plane, optionally bounded in-plane by a polygon.

use std::f64::consts::PI;

use nalgebra::Vector3;

/// One line of the joint's in-plane polygonal bound, expressed in the joint's
/// own strike/dip frame: `(u,v,0)` is the 2-D line normal, `l` its signed
/// distance from the joint centre in that frame.
#[derive(Clone, Copy, Debug)]
pub struct ShapeLine {
    pub u: f64,
    pub v: f64,
    pub l: f64,
}

impl ShapeLine {
    #[inline]
    pub fn new(u: f64, v: f64, l: f64) -> Self {
        Self { u, v, l }
    }
}

/// A world-frame half-space `n · x <= d`, used for the joint's polygonal bound
/// once rotated out of its local strike/dip frame. Carries no friction/cohesion:
/// it constrains geometry only, never the LP's physical attributes.
#[derive(Clone, Copy, Debug)]
pub struct Bound {
    pub n: Vector3<f64>,
    pub d: f64,
}

/// An oriented cutting plane ("discontinuity"), with an optional polygonal bound.
///
/// Invariants:
/// - `n` is non-zero.
/// - `d`/`centre` are measured in whatever frame the joint currently tracks
///   (world frame as received from the driver, or a polytope's local frame
///   after [`Joint::translate_to`]).
/// - An empty `shape` means the plane is unbounded.
#[derive(Clone, Debug)]
pub struct Joint {
    pub n: Vector3<f64>,
    pub centre: Vector3<f64>,
    pub d: f64,
    pub dip: f64,
    pub dip_direction: f64,
    pub friction: f64,
    pub cohesion: f64,
    pub shape: Vec<ShapeLine>,
}

impl Joint {
    pub fn new(
        n: Vector3<f64>,
        centre: Vector3<f64>,
        d: f64,
        dip: f64,
        dip_direction: f64,
        friction: f64,
        cohesion: f64,
        shape: Vec<ShapeLine>,
    ) -> Self {
        debug_assert!(n.norm() > 0.0, "joint normal must be non-zero");
        Self {
            n,
            centre,
            d,
            dip,
            dip_direction,
            friction,
            cohesion,
            shape,
        }
    }

    /// Returns a joint re-anchored to `origin`: `d` is shifted so the plane
    /// equation holds against coordinates measured relative to `origin`, and
    /// `centre` is re-expressed in that same frame. Per spec §4.D:
    /// `d_new = d + n · (centre - origin)`.
    pub fn translate_to(&self, origin: Vector3<f64>) -> Joint {
        let d_new = self.d + self.n.dot(&(self.centre - origin));
        Joint {
            centre: self.centre - origin,
            d: d_new,
            ..self.clone()
        }
    }

    /// The joint's strike unit vector: `N_strike = (cos s, sin s, 0)`,
    /// `s = (dip_direction + pi/2) mod 2pi`.
    fn strike(&self) -> Vector3<f64> {
        let s = (self.dip_direction + PI / 2.0).rem_euclid(2.0 * PI);
        Vector3::new(s.cos(), s.sin(), 0.0)
    }

    /// `Q = [N_strike | N_dip | N_plane]`, the rotation from the joint's local
    /// strike/dip/normal frame into whichever frame `centre`/`d` currently use.
    fn frame(&self) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        let n_plane = self.n.normalize();
        let n_strike = self.strike();
        let n_dip = n_plane.cross(&n_strike);
        (n_strike, n_dip, n_plane)
    }

    /// World-frame (or, after `translate_to`, local-frame) half-spaces bounding
    /// the joint in its own plane. Empty `shape` yields an empty list, i.e. an
    /// unbounded plane.
    pub fn global_coordinates(&self) -> Vec<Bound> {
        let (n_strike, n_dip, _n_plane) = self.frame();
        self.shape
            .iter()
            .map(|line| {
                let dir = n_strike * line.u + n_dip * line.v;
                let d = line.l + dir.dot(&self.centre);
                Bound { n: dir, d }
            })
            .collect()
    }
}
