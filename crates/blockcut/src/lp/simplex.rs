//! Two-phase tableau simplex over unrestricted reals.
//!
//! Column layout of the standard-form tableau built from an [`LpProblem`]:
//!
//! ```text
//! [ x+_0 .. x+_{n-1} | x-_0 .. x-_{n-1} | slack_0 .. slack_{s-1} | art_0 .. art_{a-1} | rhs ]
//! ```
//!
//! `x_i = x+_i - x-_i` realises unrestricted variables on top of a
//! non-negative simplex. Every constraint row is normalised to a non-negative
//! right-hand side; `Le` rows get a `+1` slack (usable directly as an initial
//! basic variable), `Ge` rows get a `-1` slack plus an artificial variable,
//! and `Eq` rows get only an artificial variable.

use nalgebra::DMatrix;

use super::types::{LpProblem, LpSolution, Relation, Sense};

const EPS: f64 = 1e-9;
const MAX_PIVOTS: usize = 2_000;

struct Standard {
    tableau: DMatrix<f64>,
    basis: Vec<usize>,
    n: usize,
    num_slack: usize,
    num_artificial: usize,
}

impl Standard {
    fn total_cols(&self) -> usize {
        2 * self.n + self.num_slack + self.num_artificial
    }
    fn rhs_col(&self) -> usize {
        self.total_cols()
    }
    fn artificial_start(&self) -> usize {
        2 * self.n + self.num_slack
    }
}

pub fn solve(problem: &LpProblem) -> Option<LpSolution> {
    let n = problem.variable_count();
    if n == 0 {
        return None;
    }
    let mut std_form = build_standard_form(problem);
    let m = std_form.basis.len();
    if m == 0 {
        // No constraints: unrestricted LP is unbounded unless the objective
        // is identically zero, in which case the origin is optimal.
        if problem.objective().iter().all(|c| c.abs() < EPS) {
            return Some(LpSolution {
                assignment: vec![0.0; n],
                optimum: 0.0,
            });
        }
        return None;
    }

    if std_form.num_artificial > 0 {
        let phase1_cost = phase1_cost_vector(&std_form);
        let mut obj_row = build_objective_row(&std_form, &phase1_cost);
        let all_cols: Vec<usize> = (0..std_form.total_cols()).collect();
        match run_simplex(&mut std_form, &mut obj_row, &all_cols) {
            SimplexOutcome::Unbounded => return None,
            SimplexOutcome::CycleLimit => return None,
            SimplexOutcome::Optimal => {}
        }
        let phase1_value = -obj_row[std_form.rhs_col()];
        if phase1_value.abs() > 1e-7 {
            return None; // infeasible
        }
        drive_out_artificials(&mut std_form);
    }

    let phase2_cost = phase2_cost_vector(&std_form, problem.sense(), problem.objective());
    let mut obj_row = build_objective_row(&std_form, &phase2_cost);
    let artificial_start = std_form.artificial_start();
    let candidate_cols: Vec<usize> = (0..artificial_start).collect();
    match run_simplex(&mut std_form, &mut obj_row, &candidate_cols) {
        SimplexOutcome::Unbounded | SimplexOutcome::CycleLimit => return None,
        SimplexOutcome::Optimal => {}
    }

    let assignment: Vec<f64> = (0..n)
        .map(|i| {
            let plus = column_value(&std_form, i);
            let minus = column_value(&std_form, n + i);
            plus - minus
        })
        .collect();
    let optimum: f64 = problem
        .objective()
        .iter()
        .zip(&assignment)
        .map(|(c, x)| c * x)
        .sum();
    Some(LpSolution {
        assignment,
        optimum,
    })
}

fn build_standard_form(problem: &LpProblem) -> Standard {
    let n = problem.variable_count();
    let constraints = problem.constraints();
    let m = constraints.len();

    let num_slack = constraints
        .iter()
        .filter(|c| c.relation != Relation::Eq)
        .count();
    let num_artificial = constraints
        .iter()
        .filter(|c| c.relation != Relation::Le)
        .count();

    let mut tableau = DMatrix::<f64>::zeros(m, 2 * n + num_slack + num_artificial + 1);
    let mut basis = vec![0usize; m];
    let rhs_col = 2 * n + num_slack + num_artificial;
    let artificial_start = 2 * n + num_slack;

    let mut next_slack = 2 * n;
    let mut next_artificial = artificial_start;
    for (row, c) in constraints.iter().enumerate() {
        let mut coeffs = c.coeffs.clone();
        let mut rhs = c.rhs;
        let mut relation = c.relation;
        if rhs < 0.0 {
            rhs = -rhs;
            for v in coeffs.iter_mut() {
                *v = -*v;
            }
            relation = match relation {
                Relation::Eq => Relation::Eq,
                Relation::Le => Relation::Ge,
                Relation::Ge => Relation::Le,
            };
        }
        for (i, &a) in coeffs.iter().enumerate() {
            tableau[(row, i)] = a;
            tableau[(row, n + i)] = -a;
        }
        tableau[(row, rhs_col)] = rhs;

        match relation {
            Relation::Le => {
                tableau[(row, next_slack)] = 1.0;
                basis[row] = next_slack;
                next_slack += 1;
            }
            Relation::Ge => {
                tableau[(row, next_slack)] = -1.0;
                next_slack += 1;
                tableau[(row, next_artificial)] = 1.0;
                basis[row] = next_artificial;
                next_artificial += 1;
            }
            Relation::Eq => {
                tableau[(row, next_artificial)] = 1.0;
                basis[row] = next_artificial;
                next_artificial += 1;
            }
        }
    }

    Standard {
        tableau,
        basis,
        n,
        num_slack,
        num_artificial,
    }
}

fn phase1_cost_vector(s: &Standard) -> Vec<f64> {
    let mut cost = vec![0.0; s.total_cols()];
    for j in s.artificial_start()..s.total_cols() {
        cost[j] = 1.0;
    }
    cost
}

fn phase2_cost_vector(s: &Standard, sense: Sense, objective: &[f64]) -> Vec<f64> {
    let sign = match sense {
        Sense::Min => 1.0,
        Sense::Max => -1.0,
    };
    let mut cost = vec![0.0; s.total_cols()];
    for i in 0..s.n {
        cost[i] = sign * objective[i];
        cost[s.n + i] = -sign * objective[i];
    }
    cost
}

/// Builds the reduced-cost row for `cost`, given the current basis: starts
/// from `cost` verbatim, then eliminates every basic column by subtracting
/// `cost[basis[i]] * tableau.row(i)`, exactly mirroring the row operations
/// already applied to the constraint rows.
fn build_objective_row(s: &Standard, cost: &[f64]) -> Vec<f64> {
    let mut row = cost.to_vec();
    row.push(0.0);
    for (i, &b) in s.basis.iter().enumerate() {
        let c_b = cost[b];
        if c_b.abs() > 0.0 {
            for j in 0..=s.total_cols() {
                let t = if j == s.total_cols() {
                    s.tableau[(i, s.rhs_col())]
                } else {
                    s.tableau[(i, j)]
                };
                row[j] -= c_b * t;
            }
        }
    }
    row
}

enum SimplexOutcome {
    Optimal,
    Unbounded,
    CycleLimit,
}

/// Bland's-rule tableau simplex: entering variable is the smallest-index
/// candidate column with a negative reduced cost; leaving variable is the
/// smallest-index basic row among ratio-test ties. Guarantees termination.
fn run_simplex(s: &mut Standard, obj_row: &mut [f64], candidate_cols: &[usize]) -> SimplexOutcome {
    let rhs_col = s.rhs_col();
    for _ in 0..MAX_PIVOTS {
        let enter = candidate_cols.iter().copied().find(|&j| obj_row[j] < -EPS);
        let Some(enter) = enter else {
            return SimplexOutcome::Optimal;
        };

        let mut leave: Option<usize> = None;
        let mut best_ratio = f64::INFINITY;
        for i in 0..s.basis.len() {
            let a = s.tableau[(i, enter)];
            if a > EPS {
                let ratio = s.tableau[(i, rhs_col)] / a;
                let better = match leave {
                    None => true,
                    Some(cur) => {
                        ratio < best_ratio - EPS
                            || (ratio < best_ratio + EPS && s.basis[i] < s.basis[cur])
                    }
                };
                if better {
                    best_ratio = ratio;
                    leave = Some(i);
                }
            }
        }
        let Some(leave) = leave else {
            return SimplexOutcome::Unbounded;
        };

        pivot(s, obj_row, leave, enter);
        s.basis[leave] = enter;
    }
    SimplexOutcome::CycleLimit
}

fn pivot(s: &mut Standard, obj_row: &mut [f64], leave: usize, enter: usize) {
    let rhs_col = s.rhs_col();
    let total = s.total_cols();
    let pivot_val = s.tableau[(leave, enter)];
    for j in 0..=total {
        let col = if j == total { rhs_col } else { j };
        s.tableau[(leave, col)] /= pivot_val;
    }
    for i in 0..s.basis.len() {
        if i == leave {
            continue;
        }
        let factor = s.tableau[(i, enter)];
        if factor.abs() < EPS {
            continue;
        }
        for j in 0..=total {
            let col = if j == total { rhs_col } else { j };
            let sub = s.tableau[(leave, col)];
            s.tableau[(i, col)] -= factor * sub;
        }
    }
    let factor = obj_row[enter];
    if factor.abs() > 0.0 {
        for j in 0..=total {
            let col = if j == total { rhs_col } else { j };
            let sub = s.tableau[(leave, col)];
            obj_row[j] -= factor * sub;
        }
    }
}

/// Pivots out any artificial variable left basic at (near) zero after phase
/// 1, swapping it for any non-artificial column with a non-zero entry in its
/// row. Rows where no such column exists encode a redundant constraint and
/// are left as-is; their artificial stays pinned at zero and is simply never
/// offered as a phase-2 candidate.
fn drive_out_artificials(s: &mut Standard) {
    let artificial_start = s.artificial_start();
    let rhs_col = s.rhs_col();
    let total = s.total_cols();
    for row in 0..s.basis.len() {
        if s.basis[row] < artificial_start {
            continue;
        }
        if let Some(col) = (0..artificial_start).find(|&j| s.tableau[(row, j)].abs() > EPS) {
            let pivot_val = s.tableau[(row, col)];
            for j in 0..=total {
                let c = if j == total { rhs_col } else { j };
                s.tableau[(row, c)] /= pivot_val;
            }
            for i in 0..s.basis.len() {
                if i == row {
                    continue;
                }
                let factor = s.tableau[(i, col)];
                if factor.abs() < EPS {
                    continue;
                }
                for j in 0..=total {
                    let c = if j == total { rhs_col } else { j };
                    let sub = s.tableau[(row, c)];
                    s.tableau[(i, c)] -= factor * sub;
                }
            }
            s.basis[row] = col;
        }
    }
}

fn column_value(s: &Standard, col: usize) -> f64 {
    for (row, &b) in s.basis.iter().enumerate() {
        if b == col {
            return s.tableau[(row, s.rhs_col())];
        }
    }
    0.0
}
