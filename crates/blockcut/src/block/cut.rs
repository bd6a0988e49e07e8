use crate::face::Face;
use crate::joint::Joint;

use super::update_faces::translate_face;
use super::Block;

impl Block {
    /// Splits the polytope across `joint`. Returns `[self]` unchanged if the
    /// joint does not meet the polytope's interior; otherwise two children
    /// sharing the witness point as their new local origin (spec §4.E.2).
    pub fn cut(&self, joint: &Joint) -> Vec<Block> {
        let Some(witness) = self.intersects(joint) else {
            return vec![self.clone()];
        };
        let new_origin = self.origin + witness;
        let translated: Vec<Face> = self
            .faces
            .iter()
            .map(|f| translate_face(f, self.origin, new_origin))
            .collect();

        let mut plus_faces = translated.clone();
        plus_faces.push(Face::new(joint.n, 0.0, joint.friction, joint.cohesion));

        let mut minus_faces = translated;
        minus_faces.push(Face::new(-joint.n, 0.0, joint.friction, joint.cohesion));

        vec![
            Block::new(new_origin, plus_faces),
            Block::new(new_origin, minus_faces),
        ]
    }
}
