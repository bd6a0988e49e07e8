use nalgebra::Vector3;

use crate::face::Face;
use crate::tolerance::GEOM_EPS;

use super::Block;

impl Block {
    /// Re-expresses every face's offset relative to `new_origin`, leaving
    /// each plane's world-frame position unchanged.
    pub fn update_faces(&self, new_origin: Vector3<f64>) -> Vec<Face> {
        self.faces
            .iter()
            .map(|f| translate_face(f, self.origin, new_origin))
            .collect()
    }
}

/// Picks a world point on `face`'s plane via the axis whose normal component
/// is largest, trying `z`, `y`, `x` in that order (spec §4.E.7's "c, b, a"
/// priority), then re-expresses the offset relative to `new_origin`.
pub(super) fn translate_face(face: &Face, origin: Vector3<f64>, new_origin: Vector3<f64>) -> Face {
    let n = face.n;
    let local_point = if n.z.abs() >= GEOM_EPS {
        Vector3::new(0.0, 0.0, face.d / n.z)
    } else if n.y.abs() >= GEOM_EPS {
        Vector3::new(0.0, face.d / n.y, 0.0)
    } else {
        debug_assert!(n.x.abs() >= GEOM_EPS, "face normal must be non-zero");
        Vector3::new(face.d / n.x, 0.0, 0.0)
    };
    let world_point = origin + local_point;
    let d_new = n.dot(&(world_point - new_origin));
    Face::new(n, d_new, face.friction, face.cohesion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translating_to_the_same_origin_is_a_no_op() {
        let f = Face::new(Vector3::new(0.0, 0.0, 1.0), 0.5, 30.0, 0.0);
        let origin = Vector3::new(1.0, 2.0, 3.0);
        let out = translate_face(&f, origin, origin);
        assert!((out.d - f.d).abs() < 1e-12);
    }

    #[test]
    fn translating_shifts_offset_by_the_axis_aligned_displacement() {
        // Plane z=0.5 in world coords (origin at 0). Re-anchor to z=0.2:
        // the plane is now 0.3 above the new origin.
        let f = Face::new(Vector3::new(0.0, 0.0, 1.0), 0.5, 30.0, 0.0);
        let out = translate_face(&f, Vector3::zeros(), Vector3::new(0.0, 0.0, 0.2));
        assert!((out.d - 0.3).abs() < 1e-9);
    }

    #[test]
    fn evaluating_at_a_fixed_world_point_is_invariant_under_reanchoring() {
        let f = Face::new(Vector3::new(1.0, 2.0, -1.0), 1.5, 30.0, 0.0);
        let origin = Vector3::new(0.3, -0.7, 2.0);
        let new_origin = Vector3::new(-1.0, 4.0, 0.5);
        let out = translate_face(&f, origin, new_origin);

        let world_x = Vector3::new(5.0, -2.0, 1.0);
        let before = f.eval(world_x - origin) - f.d;
        let after = out.eval(world_x - new_origin) - out.d;
        assert!((before - after).abs() < 1e-9);
    }
}
