//! Property-based tests for the invariants listed in spec §8.
//!
//! Each property is checked against randomly generated inputs built around a
//! fixed axis-aligned cube, since that is cheap to generate and keeps the
//! properties themselves (rather than input validity) under test.

use nalgebra::Vector3;
use proptest::prelude::*;

use crate::face::Face;
use crate::joint::Joint;

use super::update_faces::translate_face;
use super::Block;

fn half_cube(half: f64) -> Block {
    Block::new(
        Vector3::zeros(),
        vec![
            Face::new(Vector3::new(1.0, 0.0, 0.0), half, 30.0, 0.0),
            Face::new(Vector3::new(-1.0, 0.0, 0.0), half, 30.0, 0.0),
            Face::new(Vector3::new(0.0, 1.0, 0.0), half, 30.0, 0.0),
            Face::new(Vector3::new(0.0, -1.0, 0.0), half, 30.0, 0.0),
            Face::new(Vector3::new(0.0, 0.0, 1.0), half, 30.0, 0.0),
            Face::new(Vector3::new(0.0, 0.0, -1.0), half, 30.0, 0.0),
        ],
    )
}

fn unit_normal(x: f64, y: f64, z: f64) -> Vector3<f64> {
    let n = Vector3::new(x, y, z);
    if n.norm() < 1e-6 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        n.normalize()
    }
}

proptest! {
    /// Invariant 4: re-anchoring a face to a new origin must not change the
    /// signed distance (relative to `‖n‖`) it reports at any fixed world point.
    #[test]
    fn update_faces_preserves_signed_distance(
        nx in -1.0..1.0f64, ny in -1.0..1.0f64, nz in -1.0..1.0f64,
        d in -5.0..5.0f64,
        ox in -5.0..5.0f64, oy in -5.0..5.0f64, oz in -5.0..5.0f64,
        nox in -5.0..5.0f64, noy in -5.0..5.0f64, noz in -5.0..5.0f64,
        px in -5.0..5.0f64, py in -5.0..5.0f64, pz in -5.0..5.0f64,
    ) {
        let n = unit_normal(nx, ny, nz);
        let f = Face::new(n, d, 30.0, 0.0);
        let origin = Vector3::new(ox, oy, oz);
        let new_origin = Vector3::new(nox, noy, noz);
        let moved = translate_face(&f, origin, new_origin);

        let world_point = Vector3::new(px, py, pz);
        let before = f.eval(world_point - origin) - f.d;
        let after = moved.eval(world_point - new_origin) - moved.d;
        prop_assert!((before - after).abs() < 1e-6);
    }

    /// Invariants 2 & 3: dropping redundant/duplicated faces from a cube
    /// padded with wider copies of its own faces is idempotent and yields a
    /// value subset of the input.
    #[test]
    fn non_redundant_faces_is_idempotent_and_a_subset(
        half in 0.1..10.0f64,
        pad in 0.0..10.0f64,
    ) {
        let mut faces = half_cube(half).faces;
        let padded = half_cube(half + pad).faces;
        faces.extend(padded);
        let block = Block::new(Vector3::zeros(), faces.clone());

        let once = block.non_redundant_faces();
        for f in &once {
            prop_assert!(faces.contains(f));
        }
        let twice = Block::new(Vector3::zeros(), once.clone()).non_redundant_faces();
        prop_assert_eq!(once.len(), twice.len());
        for f in &twice {
            prop_assert!(once.contains(f));
        }
    }

    /// Invariant 1: cutting a cube with a plane through its centre, in any
    /// orientation, either leaves it alone or produces two children sharing
    /// an origin that lies on the joint's plane and whose face sets each
    /// carry a copy of the joint's plane with opposite normals.
    #[test]
    fn cut_children_straddle_the_joint_plane(
        nx in -1.0..1.0f64, ny in -1.0..1.0f64, nz in -1.0..1.0f64,
    ) {
        let cube = half_cube(1.0);
        let n = unit_normal(nx, ny, nz);
        let joint = Joint::new(n, Vector3::zeros(), 0.0, 0.0, 0.0, 30.0, 0.0, Vec::new());
        let children = cube.cut(&joint);

        match children.len() {
            1 => prop_assert_eq!(children[0].faces.len(), cube.faces.len()),
            2 => {
                prop_assert_eq!(children[0].origin, children[1].origin);
                let on_plane = joint.n.dot(&children[0].origin) - joint.d;
                prop_assert!(on_plane.abs() < 1e-9);
                prop_assert!(children[0].faces.iter().any(|f| f.n == joint.n && f.d == 0.0));
                prop_assert!(children[1].faces.iter().any(|f| f.n == -joint.n && f.d == 0.0));
            }
            other => prop_assert!(false, "cut returned an unexpected child count: {other}"),
        }
    }

    /// Invariant 6: a single random planar cut through the cube's interior,
    /// canonicalised, always yields a child of strictly positive volume.
    #[test]
    fn canonicalized_cut_children_have_positive_volume(
        nx in -1.0..1.0f64, ny in -1.0..1.0f64, nz in -1.0..1.0f64,
    ) {
        let cube = half_cube(1.0);
        let n = unit_normal(nx, ny, nz);
        let joint = Joint::new(n, Vector3::zeros(), 0.0, 0.0, 0.0, 30.0, 0.0, Vec::new());
        for child in cube.cut(&joint) {
            let canon = child.canonicalize();
            let vertices = canon.find_vertices();
            let mesh = canon.mesh_faces(&vertices);
            let (volume, _) = canon.centroid(&vertices, &mesh);
            prop_assert!(volume > 0.0);
        }
    }
}
