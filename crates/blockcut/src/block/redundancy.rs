use crate::face::Face;
use crate::lp::{LpProblem, Relation, Sense};
use crate::tolerance::GEOM_EPS;

use super::Block;

impl Block {
    /// Deduplicates structurally-equal faces, then drops every face that is
    /// never the active bound of the polytope (spec §4.E.3). Preserves the
    /// insertion order of the faces that survive.
    pub fn non_redundant_faces(&self) -> Vec<Face> {
        let mut deduped: Vec<Face> = Vec::new();
        for f in &self.faces {
            if !deduped.contains(f) {
                deduped.push(*f);
            }
        }

        deduped
            .into_iter()
            .filter(|f| is_active(f, &self.faces))
            .collect()
    }
}

fn is_active(f: &Face, faces: &[Face]) -> bool {
    let mut lp = LpProblem::new(3);
    lp.set_objective(&[f.n.x, f.n.y, f.n.z], Sense::Max);
    for g in faces {
        lp.add_constraint(&[g.n.x, g.n.y, g.n.z], Relation::Le, g.d);
    }
    match lp.solve() {
        Some(solution) => (solution.optimum - f.d).abs() <= GEOM_EPS,
        None => false,
    }
}
