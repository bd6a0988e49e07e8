use nalgebra::Vector3;

use crate::face::Face;
use crate::joint::Joint;

use super::Block;

fn two_cube() -> Block {
    Block::new(
        Vector3::zeros(),
        vec![
            Face::new(Vector3::new(1.0, 0.0, 0.0), 2.0, 30.0, 0.0),
            Face::new(Vector3::new(-1.0, 0.0, 0.0), 0.0, 30.0, 0.0),
            Face::new(Vector3::new(0.0, 1.0, 0.0), 2.0, 30.0, 0.0),
            Face::new(Vector3::new(0.0, -1.0, 0.0), 0.0, 30.0, 0.0),
            Face::new(Vector3::new(0.0, 0.0, 1.0), 2.0, 30.0, 0.0),
            Face::new(Vector3::new(0.0, 0.0, -1.0), 0.0, 30.0, 0.0),
        ],
    )
}

/// S6: two orthogonal cuts through the 2-cube's centre, each child
/// canonicalised, must land on the four quarter-columns with the literal
/// origins and face offsets spec §8 lists.
#[test]
fn s6_two_orthogonal_cuts_produce_four_quarter_columns() {
    let cube = two_cube();
    let x_cut = Joint::new(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 1.0),
        0.0,
        0.0,
        0.0,
        30.0,
        0.0,
        Vec::new(),
    );
    let z_cut = Joint::new(
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 1.0, 1.0),
        0.0,
        0.0,
        0.0,
        30.0,
        0.0,
        Vec::new(),
    );

    let after_x = cube.cut(&x_cut);
    assert_eq!(after_x.len(), 2);

    let mut quarters = Vec::new();
    for half in &after_x {
        for quarter in half.cut(&z_cut) {
            quarters.push(quarter.canonicalize());
        }
    }
    assert_eq!(quarters.len(), 4);

    let mut origins: Vec<Vector3<f64>> = quarters.iter().map(|b| b.origin).collect();
    origins.sort_by(|a, b| {
        (a.x, a.y, a.z)
            .partial_cmp(&(b.x, b.y, b.z))
            .unwrap()
    });
    let expected = [
        Vector3::new(0.5, 1.0, 0.5),
        Vector3::new(0.5, 1.0, 1.5),
        Vector3::new(1.5, 1.0, 0.5),
        Vector3::new(1.5, 1.0, 1.5),
    ];
    for (got, want) in origins.iter().zip(&expected) {
        assert!((got - want).norm() < 1e-9, "got {got:?}, want {want:?}");
    }

    for quarter in &quarters {
        assert_eq!(quarter.faces.len(), 6);
        for f in &quarter.faces {
            let expected_offset = if f.n.y.abs() > 0.5 { 1.0 } else { 0.5 };
            assert!(
                (f.d - expected_offset).abs() < 1e-9,
                "face {f:?} has unexpected offset"
            );
        }
    }
}

#[test]
fn invariant_update_faces_preserves_signed_distance() {
    let cube = two_cube();
    let new_origin = Vector3::new(0.5, 0.5, 0.5);
    let moved = cube.update_faces(new_origin);
    let probe = Vector3::new(1.7, -0.4, 3.2);
    for (original, updated) in cube.faces.iter().zip(&moved) {
        let before = original.eval(probe - cube.origin) - original.d;
        let after = updated.eval(probe - new_origin) - updated.d;
        assert!((before - after).abs() < 1e-9);
    }
}

#[test]
fn invariant_non_redundant_faces_is_a_value_subset() {
    let mut faces = two_cube().faces;
    faces.push(Face::new(Vector3::new(1.0, 0.0, 0.0), 5.0, 30.0, 0.0));
    let block = Block::new(Vector3::zeros(), faces.clone());
    let kept = block.non_redundant_faces();
    for f in &kept {
        assert!(faces.contains(f));
    }
}

#[test]
fn invariant_cut_children_straddle_the_joint_plane_with_opposite_normals() {
    let cube = two_cube();
    let joint = Joint::new(
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 1.0, 1.0),
        0.0,
        0.0,
        0.0,
        30.0,
        0.0,
        Vec::new(),
    );
    let children = cube.cut(&joint);
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].origin, children[1].origin);

    let on_plane = joint.n.dot(&children[0].origin) - joint.d;
    assert!(on_plane.abs() < 1e-9);

    assert!(children[0]
        .faces
        .iter()
        .any(|f| f.n == joint.n && f.d == 0.0));
    assert!(children[1]
        .faces
        .iter()
        .any(|f| f.n == -joint.n && f.d == 0.0));
}
