//! Scene schema: the JSON contract a driver uses to feed the engine an
//! initial polytope and an ordered joint stream (spec §6), and to read back
//! the canonicalised result.

use blockcut::{Block, Face, Joint, ShapeLine};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SceneFace {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    #[serde(default)]
    pub friction: f64,
    #[serde(default)]
    pub cohesion: f64,
}

impl From<&SceneFace> for Face {
    fn from(f: &SceneFace) -> Self {
        Face::new(Vector3::new(f.a, f.b, f.c), f.d, f.friction, f.cohesion)
    }
}

#[derive(Deserialize)]
pub struct SceneShapeLine {
    pub u: f64,
    pub v: f64,
    pub l: f64,
}

#[derive(Deserialize)]
pub struct SceneJoint {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub cx: f64,
    pub cy: f64,
    pub cz: f64,
    pub d: f64,
    #[serde(default)]
    pub dip: f64,
    #[serde(default)]
    pub dip_direction: f64,
    #[serde(default)]
    pub friction: f64,
    #[serde(default)]
    pub cohesion: f64,
    #[serde(default)]
    pub shape: Vec<SceneShapeLine>,
}

impl From<&SceneJoint> for Joint {
    fn from(j: &SceneJoint) -> Self {
        Joint::new(
            Vector3::new(j.a, j.b, j.c),
            Vector3::new(j.cx, j.cy, j.cz),
            j.d,
            j.dip,
            j.dip_direction,
            j.friction,
            j.cohesion,
            j.shape
                .iter()
                .map(|s| ShapeLine::new(s.u, s.v, s.l))
                .collect(),
        )
    }
}

/// Input contract: an initial bounded polytope plus the ordered joint stream
/// that will cut it. Assembling a bounded domain is the driver's
/// responsibility, not the engine's.
#[derive(Deserialize)]
pub struct Scene {
    pub origin: [f64; 3],
    pub faces: Vec<SceneFace>,
    pub joints: Vec<SceneJoint>,
}

impl Scene {
    pub fn initial_block(&self) -> Block {
        Block::new(
            Vector3::new(self.origin[0], self.origin[1], self.origin[2]),
            self.faces.iter().map(Face::from).collect(),
        )
    }

    pub fn joints(&self) -> Vec<Joint> {
        self.joints.iter().map(Joint::from).collect()
    }
}

/// One output face: world-local coefficients plus the inert attributes,
/// tolerance-snapped.
#[derive(Serialize)]
pub struct OutputFace {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub friction: f64,
    pub cohesion: f64,
}

impl From<&Face> for OutputFace {
    fn from(f: &Face) -> Self {
        OutputFace {
            a: f.n.x,
            b: f.n.y,
            c: f.n.z,
            d: f.d,
            friction: f.friction,
            cohesion: f.cohesion,
        }
    }
}

/// One canonicalised child polytope: its centroid-anchored local origin and
/// the non-redundant faces bounding it, measured relative to that origin.
#[derive(Serialize)]
pub struct OutputBlock {
    pub origin: [f64; 3],
    pub faces: Vec<OutputFace>,
}

impl From<&Block> for OutputBlock {
    fn from(b: &Block) -> Self {
        OutputBlock {
            origin: [b.origin.x, b.origin.y, b.origin.z],
            faces: b.faces.iter().map(OutputFace::from).collect(),
        }
    }
}
