//! LP problem builder and result types.

use super::simplex;

/// Optimisation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    Min,
    Max,
}

/// Constraint relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Le,
    Ge,
}

/// One row of the constraint system: `coeffs · x <relation> rhs`.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub coeffs: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

/// A linear program over `n` unrestricted real variables, built incrementally
/// and solved once. See spec §4.A.
#[derive(Clone, Debug)]
pub struct LpProblem {
    n: usize,
    sense: Sense,
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
}

/// An optimal assignment and the objective value it achieves.
#[derive(Clone, Debug)]
pub struct LpSolution {
    pub assignment: Vec<f64>,
    pub optimum: f64,
}

impl LpProblem {
    /// A new LP over `n` unrestricted real variables, with a zero objective
    /// and no constraints. Call `set_objective` before `solve`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            sense: Sense::Min,
            objective: vec![0.0; n],
            constraints: Vec::new(),
        }
    }

    /// Dimension mismatches between `coeffs` and `n` are a programming error.
    pub fn set_objective(&mut self, coeffs: &[f64], sense: Sense) {
        assert_eq!(coeffs.len(), self.n, "objective dimension mismatch");
        self.objective = coeffs.to_vec();
        self.sense = sense;
    }

    /// Dimension mismatches between `coeffs` and `n` are a programming error.
    pub fn add_constraint(&mut self, coeffs: &[f64], relation: Relation, rhs: f64) {
        assert_eq!(coeffs.len(), self.n, "constraint dimension mismatch");
        self.constraints.push(Constraint {
            coeffs: coeffs.to_vec(),
            relation,
            rhs,
        });
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn sense(&self) -> Sense {
        self.sense
    }

    #[inline]
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    #[inline]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Solves the LP; `None` means infeasible, unbounded, or a numerical
    /// breakdown (cycling, singular basis), all treated identically by
    /// callers as "no useful information".
    pub fn solve(&self) -> Option<LpSolution> {
        simplex::solve(self)
    }
}
