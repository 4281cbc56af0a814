/*
 * Copyright (c) 2026 The transport-simplex developers
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A transportation simplex in tableau form.
//!
//! The solver keeps an `m×n` shipment plan together with a basis mask
//! of `m+n−1` cells. The basis corresponds to a spanning tree of the
//! bipartite graph on sources and destinations; the dual potentials
//! `u`/`v` are propagated over that tree, a candidate entering cell is
//! chosen by reduced cost, and flow is shifted along the unique closed
//! loop the entering cell forms with the basis.

use super::{SolutionState, SolveError};
use crate::grid::Grid;
use crate::problem::Problem;
use log::{debug, trace, warn};
use num_traits::{NumAssign, Signed};
use std::collections::VecDeque;
use std::fmt;
use std::fmt::Write;

/// The rule used for selecting the entering cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PivotRule {
    /// Choose the non-basic cell with the most negative reduced cost,
    /// ties broken by row-major order. Usually needs few pivots, but
    /// susceptible to cycling under heavy degeneracy.
    Dantzig,
    /// Choose the first non-basic cell with a negative reduced cost in
    /// row-major order. Bland's anti-cycling rule.
    Bland,
}

/// The result of a successful optimization.
#[derive(Clone, Debug)]
pub struct Solution<F> {
    /// The optimal shipment plan.
    pub plan: Grid<F>,
    /// The total cost of the plan.
    pub total_cost: F,
    /// The row potentials, one per source, with `u[0] = 0`.
    pub row_potentials: Vec<F>,
    /// The column potentials, one per destination.
    pub col_potentials: Vec<F>,
    /// The number of pivots performed.
    pub pivots: usize,
    /// A textual trace of the optimization, for diagnostics only.
    pub trace: Vec<String>,
}

/// A transportation simplex solver (MODI method).
///
/// All mutable solve state is owned by this value, which borrows a
/// single [`Problem`]. Nothing is shared, so concurrent solves simply
/// use independent `TransportSimplex` values.
///
/// # Example
///
/// ```
/// use transport_simplex::{Problem, SolutionState, TransportSimplex};
///
/// let problem = Problem::new(
///     vec![vec![1, 2], vec![3, 4]],
///     vec![5, 5],
///     vec![5, 5],
/// ).unwrap();
///
/// let mut spx = TransportSimplex::new(&problem);
/// assert_eq!(spx.solve(), SolutionState::Optimal);
/// assert_eq!(spx.value(), 25);
/// assert_eq!(spx.shipment(0, 0), 5);
/// assert_eq!(spx.num_pivots(), 0);
/// ```
pub struct TransportSimplex<'a, F> {
    problem: &'a Problem<F>,

    plan: Grid<F>,
    basic: Grid<bool>,
    u: Vec<F>,
    v: Vec<F>,

    /// The entering-cell selection rule. Defaults to [`PivotRule::Dantzig`].
    pub pivot_rule: PivotRule,
    /// The maximal number of pivots before the solve is aborted with
    /// [`SolveError::IterationLimit`].
    ///
    /// Defaults to `1000 * (m + n)`. `None` removes the budget; without
    /// it, termination is not guaranteed under pathological degeneracy.
    pub max_pivots: Option<usize>,

    niter: usize,
    npivots: usize,
    state: SolutionState,
    error: Option<SolveError>,
    trace: Vec<String>,
}

/// Direction of a move between two cells of a loop.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Dir {
    /// Within the same row, i.e. the column changes.
    Row,
    /// Within the same column, i.e. the row changes.
    Col,
}

/// A suspended position of the loop search: a cell of the current
/// path together with the direction it was entered by and the next
/// candidate index to try.
struct Frame {
    row: usize,
    col: usize,
    entered: Option<Dir>,
    next: usize,
}

impl<'a, F> TransportSimplex<'a, F>
where
    F: NumAssign + Signed + PartialOrd + Copy + fmt::Display,
{
    /// Create a solver for the given problem.
    pub fn new(problem: &'a Problem<F>) -> Self {
        let m = problem.num_sources();
        let n = problem.num_destinations();
        TransportSimplex {
            problem,
            plan: Grid::filled(m, n, F::zero()),
            basic: Grid::filled(m, n, false),
            u: Vec::new(),
            v: Vec::new(),
            pivot_rule: PivotRule::Dantzig,
            max_pivots: Some(1000 * (m + n)),
            niter: 0,
            npivots: 0,
            state: SolutionState::Unknown,
            error: None,
            trace: Vec::new(),
        }
    }

    /// The problem being solved.
    pub fn as_problem(&self) -> &'a Problem<F> {
        self.problem
    }

    /// Solve the problem.
    ///
    /// Builds an initial basic feasible plan with the Least Cost
    /// heuristic and runs MODI pivots until no non-basic cell has a
    /// negative reduced cost. The engine may be re-run; each call
    /// starts from a fresh plan.
    pub fn solve(&mut self) -> SolutionState {
        self.reset();

        match self.run() {
            Ok(()) => {
                self.state = SolutionState::Optimal;
                let msg = format!("optimal after {} pivot(s), cost {}", self.npivots, self.value());
                debug!("{}", msg);
                self.trace.push(msg);
            }
            Err(err) => {
                self.state = SolutionState::Aborted;
                warn!("optimization aborted: {}", err);
                self.trace.push(format!("aborted: {}", err));
                self.error = Some(err);
            }
        }

        self.state
    }

    /// Return the solution state of the latest computation.
    pub fn solution_state(&self) -> SolutionState {
        self.state
    }

    /// The error that aborted the latest solve, if any.
    pub fn error(&self) -> Option<&SolveError> {
        self.error.as_ref()
    }

    /// The shipment from source `i` to destination `j`.
    pub fn shipment(&self, i: usize, j: usize) -> F {
        self.plan[(i, j)]
    }

    /// The current shipment plan.
    pub fn plan(&self) -> &Grid<F> {
        &self.plan
    }

    /// The total cost of the current plan.
    pub fn value(&self) -> F {
        self.problem.plan_cost(&self.plan)
    }

    /// The row potentials of the latest solve, with `u[0] = 0`.
    pub fn row_potentials(&self) -> &[F] {
        &self.u
    }

    /// The column potentials of the latest solve.
    pub fn col_potentials(&self) -> &[F] {
        &self.v
    }

    /// The number of pricing rounds of the latest solve, including the
    /// final one establishing optimality.
    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    /// The number of pivots performed in the latest solve.
    pub fn num_pivots(&self) -> usize {
        self.npivots
    }

    /// The textual trace of the latest solve.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Consume the solver and return the solution of the latest solve.
    ///
    /// Must be called after [`solve`](TransportSimplex::solve); returns
    /// the abort error if the solve did not reach optimality.
    pub fn into_solution(self) -> Result<Solution<F>, SolveError> {
        debug_assert!(self.state != SolutionState::Unknown);
        match self.error {
            Some(err) => Err(err),
            None => Ok(Solution {
                total_cost: self.problem.plan_cost(&self.plan),
                plan: self.plan,
                row_potentials: self.u,
                col_potentials: self.v,
                pivots: self.npivots,
                trace: self.trace,
            }),
        }
    }

    fn reset(&mut self) {
        let m = self.problem.num_sources();
        let n = self.problem.num_destinations();
        self.plan = Grid::filled(m, n, F::zero());
        self.basic = Grid::filled(m, n, false);
        self.u.clear();
        self.v.clear();
        self.niter = 0;
        self.npivots = 0;
        self.state = SolutionState::Unknown;
        self.error = None;
        self.trace.clear();
    }

    fn run(&mut self) -> Result<(), SolveError> {
        let total_supply = self.problem.total_supply();
        let total_demand = self.problem.total_demand();
        if total_supply != total_demand {
            // Proceed anyway; no dummy source/destination is injected.
            warn!(
                "unbalanced problem: total supply {}, total demand {}",
                total_supply, total_demand
            );
            self.trace.push(format!(
                "warning: unbalanced problem (total supply {}, total demand {})",
                total_supply, total_demand
            ));
        }

        self.build_initial_plan();

        loop {
            self.niter += 1;
            self.compute_potentials()?;
            let entering = match self.find_entering_cell() {
                Some(cell) => cell,
                None => return Ok(()),
            };

            if let Some(limit) = self.max_pivots {
                if self.npivots >= limit {
                    return Err(SolveError::IterationLimit { limit });
                }
            }

            let (i, j, r) = entering;
            debug!("iteration {}: entering ({}, {}) with reduced cost {}", self.niter, i, j, r);
            self.trace
                .push(format!("iteration {}: entering ({}, {}) with reduced cost {}", self.niter, i, j, r));

            let cycle = self
                .find_loop(i, j)
                .ok_or(SolveError::LoopNotFound { row: i, col: j })?;
            self.apply_pivot(&cycle);
            self.npivots += 1;
        }
    }

    /// Build an initial basic feasible plan with the Least Cost heuristic.
    ///
    /// Cells are allocated greedily in the order of ascending cost,
    /// ties in row-major order. If the greedy pass yields fewer than
    /// `m+n−1` basic cells, the basis is padded with zero-allocation
    /// cells in row-major order.
    fn build_initial_plan(&mut self) {
        let m = self.problem.num_sources();
        let n = self.problem.num_destinations();
        let mut remaining_supply = self.problem.supply().to_vec();
        let mut remaining_demand = self.problem.demand().to_vec();

        let mut cells: Vec<(usize, usize)> = self.plan.cells().collect();
        // The sort is stable, so equal costs keep the row-major order.
        cells.sort_by(|&a, &b| {
            self.problem.costs()[a]
                .partial_cmp(&self.problem.costs()[b])
                .unwrap()
        });

        let mut basic_count = 0;
        for &(i, j) in &cells {
            if remaining_supply[i] > F::zero() && remaining_demand[j] > F::zero() {
                let quantity = if remaining_supply[i] < remaining_demand[j] {
                    remaining_supply[i]
                } else {
                    remaining_demand[j]
                };
                self.plan[(i, j)] = quantity;
                self.basic[(i, j)] = true;
                basic_count += 1;
                remaining_supply[i] -= quantity;
                remaining_demand[j] -= quantity;
            }
        }

        // Degeneracy: pad the basis up to m+n-1 cells. Row-major
        // padding ignores connectivity; a disconnected basis is caught
        // when solving for the potentials.
        let required = m + n - 1;
        if basic_count < required {
            let mut padded = 0;
            for (i, j) in self.plan.cells() {
                if basic_count == required {
                    break;
                }
                if !self.basic[(i, j)] {
                    self.basic[(i, j)] = true;
                    basic_count += 1;
                    padded += 1;
                }
            }
            self.trace.push(format!(
                "degenerate initial plan: padded {} zero-allocation cell(s) to reach {} basic cells",
                padded, required
            ));
        }

        let msg = format!("initial plan (least cost): cost {}", self.value());
        debug!("{}", msg);
        self.trace.push(msg);
    }

    /// Solve for the dual potentials over the current basis.
    ///
    /// With `u[0]` pinned to zero (the duals only determine
    /// differences), the remaining values follow from `cost = u + v` on
    /// basic cells by breadth-first propagation over the basis graph.
    /// Nodes unreachable from the reference source mean the basis is
    /// disconnected, which is a fatal invariant violation.
    fn compute_potentials(&mut self) -> Result<(), SolveError> {
        let m = self.problem.num_sources();
        let n = self.problem.num_destinations();
        let mut u: Vec<Option<F>> = vec![None; m];
        let mut v: Vec<Option<F>> = vec![None; n];
        u[0] = Some(F::zero());

        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        for j in 0..n {
            if self.basic[(0, j)] {
                queue.push_back((0, j));
            }
        }

        while let Some((i, j)) = queue.pop_front() {
            match (u[i], v[j]) {
                (Some(ui), None) => {
                    v[j] = Some(self.problem.cost(i, j) - ui);
                    for r in 0..m {
                        if self.basic[(r, j)] && u[r].is_none() {
                            queue.push_back((r, j));
                        }
                    }
                }
                (None, Some(vj)) => {
                    u[i] = Some(self.problem.cost(i, j) - vj);
                    for c in 0..n {
                        if self.basic[(i, c)] && v[c].is_none() {
                            queue.push_back((i, c));
                        }
                    }
                }
                _ => {}
            }
        }

        let rows: Vec<usize> = (0..m).filter(|&i| u[i].is_none()).collect();
        let cols: Vec<usize> = (0..n).filter(|&j| v[j].is_none()).collect();
        if !rows.is_empty() || !cols.is_empty() {
            return Err(SolveError::DisconnectedBasis { rows, cols });
        }

        self.u = u.into_iter().flatten().collect();
        self.v = v.into_iter().flatten().collect();
        trace!("u = [{}], v = [{}]", fmt_values(&self.u), fmt_values(&self.v));
        Ok(())
    }

    /// Select the entering cell according to the pivot rule.
    ///
    /// Returns the cell and its reduced cost, or `None` if no
    /// non-basic cell has a negative reduced cost, i.e. the current
    /// plan is optimal.
    fn find_entering_cell(&self) -> Option<(usize, usize, F)> {
        let mut best: Option<(usize, usize, F)> = None;
        for (i, j) in self.plan.cells() {
            if self.basic[(i, j)] {
                continue;
            }
            let r = self.problem.cost(i, j) - (self.u[i] + self.v[j]);
            if r < F::zero() {
                match self.pivot_rule {
                    PivotRule::Bland => return Some((i, j, r)),
                    PivotRule::Dantzig => {
                        // Strict comparison keeps the first cell in
                        // row-major order among equally negative ones.
                        if best.map_or(true, |(_, _, b)| r < b) {
                            best = Some((i, j, r));
                        }
                    }
                }
            }
        }
        best
    }

    /// Find the closed reallocation loop for the entering cell.
    ///
    /// The loop starts at the entering cell, alternates moves within a
    /// row and within a column, visits only basic cells otherwise, and
    /// returns to the entering cell. With a spanning-tree basis this
    /// loop exists and is unique; `None` indicates an invalid basis.
    ///
    /// Depth-first search with backtracking over an explicit frame
    /// stack, so the search depth is not bounded by the call stack.
    fn find_loop(&self, start_row: usize, start_col: usize) -> Option<Vec<(usize, usize)>> {
        let m = self.problem.num_sources();
        let n = self.problem.num_destinations();

        let mut visited = Grid::filled(m, n, false);
        visited[(start_row, start_col)] = true;
        let mut path = vec![(start_row, start_col)];
        let mut stack = vec![Frame {
            row: start_row,
            col: start_col,
            entered: None,
            next: 0,
        }];

        while let Some(top) = stack.last() {
            let (row, col, entered) = (top.row, top.col, top.entered);
            // The first step may go either way: candidates are the
            // columns of the row followed by the rows of the column.
            // Afterwards the direction alternates with the entering move.
            let limit = match entered {
                None => n + m,
                Some(Dir::Col) => n,
                Some(Dir::Row) => m,
            };

            let mut k = top.next;
            let mut chosen = None;
            while k < limit {
                let (r, c, dir) = match entered {
                    None if k < n => (row, k, Dir::Row),
                    None => (k - n, col, Dir::Col),
                    Some(Dir::Col) => (row, k, Dir::Row),
                    Some(Dir::Row) => (k, col, Dir::Col),
                };
                k += 1;
                if (r, c) == (row, col) {
                    continue;
                }
                if (r, c) == (start_row, start_col) {
                    // The loop closes once it contains at least two
                    // intermediate cells and an even number of cells.
                    if path.len() >= 4 && path.len() % 2 == 0 {
                        return Some(path);
                    }
                    continue;
                }
                if self.basic[(r, c)] && !visited[(r, c)] {
                    chosen = Some((r, c, dir));
                    break;
                }
            }

            match chosen {
                Some((r, c, dir)) => {
                    if let Some(top) = stack.last_mut() {
                        top.next = k;
                    }
                    visited[(r, c)] = true;
                    path.push((r, c));
                    stack.push(Frame {
                        row: r,
                        col: c,
                        entered: Some(dir),
                        next: 0,
                    });
                }
                None => {
                    // Dead end: unwind this cell and continue from the
                    // previous frame.
                    stack.pop();
                    if let Some(cell) = path.pop() {
                        visited[cell] = false;
                    }
                }
            }
        }

        None
    }

    /// Shift flow along the loop and exchange basis membership.
    ///
    /// Cells at even positions (including the entering cell at index
    /// 0) gain `theta`, cells at odd positions lose it, where `theta`
    /// is the minimal allocation among the losing cells. The first
    /// losing cell reaching zero leaves the basis; later simultaneous
    /// zeros stay basic with zero allocation (degenerate pivot).
    fn apply_pivot(&mut self, cycle: &[(usize, usize)]) {
        let mut theta = self.plan[cycle[1]];
        for k in (3..cycle.len()).step_by(2) {
            if self.plan[cycle[k]] < theta {
                theta = self.plan[cycle[k]];
            }
        }

        let mut leaving = None;
        for (k, &cell) in cycle.iter().enumerate() {
            if k % 2 == 0 {
                self.plan[cell] += theta;
            } else {
                self.plan[cell] -= theta;
                if self.plan[cell] == F::zero() && leaving.is_none() {
                    leaving = Some(cell);
                }
            }
        }

        self.basic[cycle[0]] = true;
        if let Some(cell) = leaving {
            self.basic[cell] = false;
        }

        let mut msg = String::from("loop:");
        for &(i, j) in cycle {
            let _ = write!(msg, " ({}, {})", i, j);
        }
        let _ = write!(msg, "; theta = {}", theta);
        if let Some((i, j)) = leaving {
            let _ = write!(msg, "; leaving ({}, {})", i, j);
        }
        debug!("{}", msg);
        self.trace.push(msg);
    }
}

fn fmt_values<F: fmt::Display>(values: &[F]) -> String {
    let mut s = String::new();
    for (k, value) in values.iter().enumerate() {
        if k > 0 {
            s.push_str(", ");
        }
        let _ = write!(s, "{}", value);
    }
    s
}

/// Solve a transportation problem to optimality.
///
/// Builds a fresh solver per call, so concurrent calls never share
/// mutable state.
///
/// # Example
///
/// ```
/// use transport_simplex::{solve, Problem};
///
/// let problem = Problem::new(
///     vec![vec![4, 3], vec![2, 5]],
///     vec![10, 20],
///     vec![15, 15],
/// ).unwrap();
///
/// let solution = solve(&problem).unwrap();
/// assert_eq!(solution.total_cost, 85);
/// ```
pub fn solve<F>(problem: &Problem<F>) -> Result<Solution<F>, SolveError>
where
    F: NumAssign + Signed + PartialOrd + Copy + fmt::Display,
{
    let mut spx = TransportSimplex::new(problem);
    spx.solve();
    spx.into_solution()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modi::{SolutionState, SolveError};
    use crate::problem::Problem;

    fn problem(costs: Vec<Vec<i64>>, supply: Vec<i64>, demand: Vec<i64>) -> Problem<i64> {
        Problem::new(costs, supply, demand).unwrap()
    }

    #[test]
    fn least_cost_allocates_and_pads() {
        let p = problem(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        spx.build_initial_plan();

        assert_eq!(spx.plan[(0, 0)], 5);
        assert_eq!(spx.plan[(1, 1)], 5);
        assert_eq!(spx.plan[(0, 1)], 0);
        // (0,1) is the first non-basic cell in row-major order, so it
        // is the one padded into the basis.
        assert!(spx.basic[(0, 0)] && spx.basic[(0, 1)] && spx.basic[(1, 1)]);
        assert!(!spx.basic[(1, 0)]);
        assert_eq!(spx.basic.values().filter(|&&b| b).count(), 3);
    }

    #[test]
    fn potentials_on_tree_basis() {
        let p = problem(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        spx.build_initial_plan();
        spx.compute_potentials().unwrap();

        assert_eq!(spx.row_potentials(), &[0, 2]);
        assert_eq!(spx.col_potentials(), &[1, 2]);
    }

    #[test]
    fn disconnected_basis_is_detected() {
        let p = problem(vec![vec![1; 3]; 3], vec![5, 5, 0], vec![10, 0, 0]);
        let mut spx = TransportSimplex::new(&p);
        spx.build_initial_plan();
        // Greedy yields only (0,0) and (1,0); padding fills (0,1),
        // (0,2) and (1,1), which closes a cycle on the first two rows
        // and leaves source 2 unreachable.
        let err = spx.compute_potentials().unwrap_err();
        assert_eq!(
            err,
            SolveError::DisconnectedBasis {
                rows: vec![2],
                cols: vec![],
            }
        );
    }

    #[test]
    fn loop_for_entering_cell() {
        let p = problem(vec![vec![1, 3], vec![2, 100]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        spx.build_initial_plan();
        // Basis is {(0,0), (0,1), (1,1)}; the loop for (1,0) must walk
        // the other three corners.
        let cycle = spx.find_loop(1, 0).unwrap();
        assert_eq!(cycle, vec![(1, 0), (1, 1), (0, 1), (0, 0)]);
    }

    #[test]
    fn no_loop_without_spanning_basis() {
        let p = problem(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        // Only a single basic cell: no loop can close.
        spx.basic[(0, 0)] = true;
        assert!(spx.find_loop(1, 1).is_none());
    }

    #[test]
    fn degenerate_pivot_first_wins() {
        let p = problem(vec![vec![1, 3], vec![2, 100]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        spx.build_initial_plan();
        spx.apply_pivot(&[(1, 0), (1, 1), (0, 1), (0, 0)]);

        // Both (1,1) and (0,0) reach zero; only the first one in loop
        // order leaves the basis.
        assert_eq!(spx.plan[(1, 1)], 0);
        assert_eq!(spx.plan[(0, 0)], 0);
        assert!(!spx.basic[(1, 1)]);
        assert!(spx.basic[(0, 0)]);
        assert!(spx.basic[(1, 0)]);
    }

    #[test]
    fn dantzig_ties_break_row_major() {
        let p = problem(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        // Fabricated state with two equally negative reduced costs.
        spx.basic[(0, 0)] = true;
        spx.basic[(1, 1)] = true;
        spx.u = vec![0, 0];
        spx.v = vec![5, 5];
        // r(0,1) = 2 - 5 = -3, r(1,0) = 3 - 5 = -2.
        assert_eq!(spx.find_entering_cell(), Some((0, 1, -3)));
        spx.v = vec![5, 4];
        // r(0,1) = r(1,0) = -2: the row-major first one wins.
        assert_eq!(spx.find_entering_cell(), Some((0, 1, -2)));
    }

    #[test]
    fn pivot_budget_aborts() {
        let p = problem(vec![vec![1, 3], vec![2, 100]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        spx.max_pivots = Some(0);
        assert_eq!(spx.solve(), SolutionState::Aborted);
        assert_eq!(spx.error(), Some(&SolveError::IterationLimit { limit: 0 }));
    }

    #[test]
    fn bland_rule_reaches_the_same_optimum() {
        let p = problem(vec![vec![1, 3], vec![2, 100]], vec![5, 5], vec![5, 5]);
        let mut spx = TransportSimplex::new(&p);
        spx.pivot_rule = PivotRule::Bland;
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(spx.value(), 25);
    }
}
