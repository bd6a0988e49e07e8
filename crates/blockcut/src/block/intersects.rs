use nalgebra::Vector3;

use crate::joint::Joint;
use crate::lp::{LpProblem, Relation, Sense};
use crate::tolerance::snap;

use super::Block;

impl Block {
    /// Whether `joint`, restricted to its polygonal bound if any, meets the
    /// polytope's interior. Returns a witness point in the local frame.
    ///
    /// Formulated as: minimise slack `s` over `(x, y, z, s)` subject to the
    /// joint plane (equality) and every bounding half-space, polytope faces
    /// and the joint's own shape bounds alike, relaxed by `s`. A strictly
    /// negative optimum means a genuine interior witness exists.
    pub fn intersects(&self, joint: &Joint) -> Option<Vector3<f64>> {
        let local = joint.translate_to(self.origin);
        let bounds = local.global_coordinates();

        let mut lp = LpProblem::new(4);
        lp.set_objective(&[0.0, 0.0, 0.0, 1.0], Sense::Min);
        lp.add_constraint(
            &[snap(local.n.x), snap(local.n.y), snap(local.n.z), 0.0],
            Relation::Eq,
            snap(local.d),
        );
        for f in &self.faces {
            let f = f.apply_tolerance();
            lp.add_constraint(&[f.n.x, f.n.y, f.n.z, -1.0], Relation::Le, f.d);
        }
        for b in &bounds {
            lp.add_constraint(
                &[snap(b.n.x), snap(b.n.y), snap(b.n.z), -1.0],
                Relation::Le,
                snap(b.d),
            );
        }

        let solution = lp.solve()?;
        if solution.optimum >= -1e-12 {
            return None;
        }
        Some(Vector3::new(
            solution.assignment[0],
            solution.assignment[1],
            solution.assignment[2],
        ))
    }
}
