use nalgebra::{Matrix3, Vector3};

use crate::tolerance::GEOM_EPS;

use super::Block;

impl Block {
    /// For each face, every distinct point where it meets two other faces
    /// (spec §4.E.4). The result is parallel to `self.faces`; callers must
    /// run [`Block::non_redundant_faces`] first for these to be true
    /// polytope vertices rather than spurious triple intersections.
    pub fn find_vertices(&self) -> Vec<Vec<Vector3<f64>>> {
        let n = self.faces.len();
        let mut out = vec![Vec::new(); n];
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let ni = self.faces[i].n;
                    let nj = self.faces[j].n;
                    let nk = self.faces[k].n;
                    if ni.dot(&nj.cross(&nk)).abs() <= GEOM_EPS {
                        continue;
                    }
                    #[rustfmt::skip]
                    let m = Matrix3::new(
                        ni.x, ni.y, ni.z,
                        nj.x, nj.y, nj.z,
                        nk.x, nk.y, nk.z,
                    );
                    let Some(inv) = m.try_inverse() else {
                        continue;
                    };
                    let rhs = Vector3::new(self.faces[i].d, self.faces[j].d, self.faces[k].d);
                    let p = inv * rhs;
                    if !out[i].iter().any(|&q: &Vector3<f64>| (q - p).norm() <= GEOM_EPS) {
                        out[i].push(p);
                    }
                }
            }
        }
        out
    }
}
