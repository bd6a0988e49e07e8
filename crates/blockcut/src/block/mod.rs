//! Polytope core (`Block`): intersection testing, cutting, redundancy
//! elimination, vertex enumeration, face meshing, and centroid/volume.

use nalgebra::Vector3;

use crate::face::Face;

mod centroid;
mod cut;
mod intersects;
mod mesh;
mod redundancy;
mod update_faces;
mod vertices;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod proptests;

/// A convex polytope: the intersection of `faces`, each anchored to `origin`.
///
/// `faces` are half-spaces `f.n · (x - origin) <= f.d`; `origin` need not be
/// the centroid except right after [`Block::canonicalize`].
#[derive(Clone, Debug)]
pub struct Block {
    pub origin: Vector3<f64>,
    pub faces: Vec<Face>,
}

impl Block {
    pub fn new(origin: Vector3<f64>, faces: Vec<Face>) -> Self {
        debug_assert!(!faces.is_empty(), "a polytope must have at least one face");
        Self { origin, faces }
    }

    /// Drops redundant faces, re-anchors to the centroid, and tolerance-snaps
    /// every remaining face. The canonical post-cut representation (spec §6).
    pub fn canonicalize(&self) -> Block {
        let reduced = Block {
            origin: self.origin,
            faces: self.non_redundant_faces(),
        };
        let vertices = reduced.find_vertices();
        let mesh = reduced.mesh_faces(&vertices);
        let (_volume, centroid_world) = reduced.centroid(&vertices, &mesh);
        let faces = reduced
            .update_faces(centroid_world)
            .iter()
            .map(Face::apply_tolerance)
            .collect();
        Block {
            origin: centroid_world,
            faces,
        }
    }
}
