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

//! The MODI (stepping-stone) optimization engine.

pub mod simplex;
pub use simplex::{solve, PivotRule, Solution, TransportSimplex};

use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The plan has been optimized to provable optimality
    Optimal,
    /// The optimization was aborted, see [`TransportSimplex::error`]
    Aborted,
}

/// A fatal condition aborting the optimization.
///
/// These are structured so that callers can tell an engine invariant
/// violation (a bug or an adversarial instance) apart from "no further
/// improvement possible", which is the optimal case and not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The basis does not span all sources and destinations.
    ///
    /// The listed rows and columns were unreachable from the reference
    /// source when solving for the dual potentials. This can happen if
    /// degeneracy padding produced an invalid basis.
    DisconnectedBasis {
        /// Unreachable source rows.
        rows: Vec<usize>,
        /// Unreachable destination columns.
        cols: Vec<usize>,
    },
    /// No closed reallocation loop exists for the entering cell, which
    /// means the basis is not a spanning tree.
    LoopNotFound {
        /// Row of the entering cell.
        row: usize,
        /// Column of the entering cell.
        col: usize,
    },
    /// The pivot budget was exhausted before reaching optimality.
    IterationLimit {
        /// The configured maximal number of pivots.
        limit: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::DisconnectedBasis { rows, cols } => write!(
                f,
                "basis is disconnected: unreachable sources {:?}, unreachable destinations {:?}",
                rows, cols
            ),
            SolveError::LoopNotFound { row, col } => {
                write!(f, "no closed loop exists for entering cell ({}, {})", row, col)
            }
            SolveError::IterationLimit { limit } => {
                write!(f, "pivot limit of {} exceeded", limit)
            }
        }
    }
}

impl Error for SolveError {}
