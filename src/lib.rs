// Copyright (c) 2026 The transport-simplex developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A solver for the classical transportation problem.
//!
//! Given an `m×n` matrix of unit shipping costs, a supply per source and
//! a demand per destination, the solver computes nonnegative shipment
//! quantities of minimum total cost. An initial basic feasible plan is
//! built with the *Least Cost* heuristic and refined to optimality with
//! the *MODI* (modified distribution, aka stepping-stone) method.
//!
//! # Example
//!
//! ```
//! use transport_simplex::{modi, Problem};
//!
//! let problem = Problem::new(
//!     vec![vec![1, 3], vec![2, 100]],
//!     vec![5, 5],
//!     vec![5, 5],
//! ).unwrap();
//!
//! let solution = modi::solve(&problem).unwrap();
//! assert_eq!(solution.total_cost, 25);
//! assert_eq!(solution.plan[(0, 1)], 5);
//! assert_eq!(solution.plan[(1, 0)], 5);
//! ```

pub mod grid;
pub use self::grid::Grid;

pub mod problem;
pub use self::problem::{Problem, ProblemError};

pub mod modi;
pub use self::modi::{solve, PivotRule, Solution, SolutionState, SolveError, TransportSimplex};
