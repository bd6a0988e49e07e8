//! Convex-polytope cutting and analysis engine.
//!
//! A rock mass starts as a single bounded convex polytope ([`block::Block`])
//! and is repeatedly split by oriented cutting planes ([`joint::Joint`]).
//! Each resulting sub-polytope can be canonicalised: redundant faces dropped,
//! re-anchored to its own centroid, and tolerance-snapped.

pub mod block;
pub mod face;
pub mod joint;
pub mod lp;
pub mod tolerance;
pub mod triangulate;

pub use block::Block;
pub use face::Face;
pub use joint::{Bound, Joint, ShapeLine};
pub use lp::{Constraint, LpProblem, LpSolution, Relation, Sense};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports for callers driving the cut tree.
pub mod prelude {
    pub use crate::block::Block;
    pub use crate::face::Face;
    pub use crate::joint::{Bound, Joint, ShapeLine};
    pub use crate::lp::{Constraint, LpProblem, LpSolution, Relation, Sense};
}
