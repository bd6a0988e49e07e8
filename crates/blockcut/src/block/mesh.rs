use nalgebra::{Vector2, Vector3};

use crate::tolerance::{face_rotation, GEOM_EPS};
use crate::triangulate::triangulate;

use super::Block;

impl Block {
    /// Triangulates each face's vertex set in its own rotated +z frame (spec
    /// §4.E.5). `vertices` must be [`Block::find_vertices`]'s output.
    pub fn mesh_faces(&self, vertices: &[Vec<Vector3<f64>>]) -> Vec<Vec<(usize, usize, usize)>> {
        self.faces
            .iter()
            .zip(vertices)
            .map(|(face, verts)| mesh_one_face(face.n, verts))
            .collect()
    }
}

fn mesh_one_face(n: Vector3<f64>, verts: &[Vector3<f64>]) -> Vec<(usize, usize, usize)> {
    let r = face_rotation(n);
    let flat: Vec<Vector2<f64>> = verts.iter().map(|v| (r * v).xy()).collect();
    let mut tris = triangulate(&flat);

    // n ~ (0,0,-1): rotation stays identity, so the triangulation above is
    // clockwise as seen from below the face. Flip it to match the outward
    // orientation every other face gets from its own rotation.
    let e_z = Vector3::new(0.0, 0.0, 1.0);
    let is_antiparallel_to_z = n.cross(&e_z).norm() < GEOM_EPS && n.z < 0.0;
    if is_antiparallel_to_z {
        for t in tris.iter_mut() {
            *t = (t.2, t.1, t.0);
        }
        tris.reverse();
    }
    tris
}
