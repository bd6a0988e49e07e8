//! Small dense linear-program solver (two-phase simplex, unrestricted reals).
//!
//! Purpose
//! - Solve the tiny LPs that `block::intersects` and `block::redundancy` pose
//!   (n <= 4 variables, a few dozen constraints at most). Simplicity trumps
//!   scale here, per spec.
//!
//! Why this design
//! - Variables range over all reals; the standard `x = x+ - x-` split (Design
//!   Notes, spec §9) keeps the underlying simplex tableau non-negative without
//!   exposing that detail to callers.
//! - Bland's rule (smallest-index entering/leaving variable) is used instead
//!   of the textbook "most negative reduced cost" rule: it guarantees
//!   termination without cycling.

mod simplex;
mod types;

pub use types::{Constraint, LpProblem, LpSolution, Relation, Sense};
