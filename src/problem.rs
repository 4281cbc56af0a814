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

//! The transportation problem instance.
//!
//! A [`Problem`] is an immutable snapshot of a cost matrix together
//! with the supply per source and the demand per destination. It is the
//! typed boundary of the solver: construction rejects malformed input
//! (empty or ragged matrices, wrong vector lengths, negative values),
//! so the solver itself can assume a well-formed instance.
//!
//! A balanced instance has equal total supply and total demand. Balance
//! is *not* enforced here; the solver warns about unbalanced instances
//! and proceeds, see [`crate::modi`].

use crate::grid::Grid;
use num_traits::NumAssign;
use std::error::Error;
use std::fmt;

/// An error rejecting a malformed problem instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProblemError {
    /// The cost matrix has no rows or no columns.
    Empty,
    /// The rows of the cost matrix have inconsistent lengths, or a
    /// supply/demand vector does not match the matrix shape.
    ShapeMismatch {
        /// Description of the offending part.
        what: &'static str,
        /// The expected length.
        expected: usize,
        /// The actual length.
        found: usize,
    },
    /// A cost, supply or demand value is negative.
    Negative {
        /// Description of the offending part.
        what: &'static str,
        /// The offending index (`(row, col)` for costs, `(i, 0)` for
        /// vectors).
        index: (usize, usize),
    },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::Empty => write!(f, "cost matrix must have at least one row and one column"),
            ProblemError::ShapeMismatch { what, expected, found } => {
                write!(f, "{} has length {}, expected {}", what, found, expected)
            }
            ProblemError::Negative { what, index } => {
                write!(f, "{} contains a negative value at {:?}", what, index)
            }
        }
    }
}

impl Error for ProblemError {}

/// An immutable transportation problem instance.
///
/// The generic parameter `F` is the numeric type used for costs,
/// quantities and potentials alike. Any signed primitive number works,
/// e.g. `i64` or `f64`.
#[derive(Clone, Debug)]
pub struct Problem<F> {
    costs: Grid<F>,
    supply: Vec<F>,
    demand: Vec<F>,
}

impl<F> Problem<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// Create a problem instance from a cost matrix given as rows.
    ///
    /// `supply` must have one entry per row of `costs`, `demand` one
    /// entry per column. All values must be nonnegative.
    pub fn new(costs: Vec<Vec<F>>, supply: Vec<F>, demand: Vec<F>) -> Result<Self, ProblemError> {
        let num_cols = costs.first().map(Vec::len).unwrap_or(0);
        if costs.is_empty() || num_cols == 0 {
            return Err(ProblemError::Empty);
        }
        for row in &costs {
            if row.len() != num_cols {
                return Err(ProblemError::ShapeMismatch {
                    what: "cost matrix row",
                    expected: num_cols,
                    found: row.len(),
                });
            }
        }
        if supply.len() != costs.len() {
            return Err(ProblemError::ShapeMismatch {
                what: "supply vector",
                expected: costs.len(),
                found: supply.len(),
            });
        }
        if demand.len() != num_cols {
            return Err(ProblemError::ShapeMismatch {
                what: "demand vector",
                expected: num_cols,
                found: demand.len(),
            });
        }
        for (i, row) in costs.iter().enumerate() {
            for (j, c) in row.iter().enumerate() {
                if *c < F::zero() {
                    return Err(ProblemError::Negative {
                        what: "cost matrix",
                        index: (i, j),
                    });
                }
            }
        }
        for (i, s) in supply.iter().enumerate() {
            if *s < F::zero() {
                return Err(ProblemError::Negative {
                    what: "supply vector",
                    index: (i, 0),
                });
            }
        }
        for (j, d) in demand.iter().enumerate() {
            if *d < F::zero() {
                return Err(ProblemError::Negative {
                    what: "demand vector",
                    index: (j, 0),
                });
            }
        }
        let costs = match Grid::from_rows(costs) {
            Some(grid) => grid,
            None => return Err(ProblemError::Empty),
        };
        Ok(Problem { costs, supply, demand })
    }

    /// The number of sources (rows).
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// The number of destinations (columns).
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// The cost matrix.
    pub fn costs(&self) -> &Grid<F> {
        &self.costs
    }

    /// The unit cost of shipping from source `i` to destination `j`.
    pub fn cost(&self, i: usize, j: usize) -> F {
        self.costs[(i, j)]
    }

    /// The supply vector.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// The demand vector.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// The total supply over all sources.
    pub fn total_supply(&self) -> F {
        let mut total = F::zero();
        for &s in &self.supply {
            total += s;
        }
        total
    }

    /// The total demand over all destinations.
    pub fn total_demand(&self) -> F {
        let mut total = F::zero();
        for &d in &self.demand {
            total += d;
        }
        total
    }

    /// Whether total supply equals total demand.
    pub fn is_balanced(&self) -> bool {
        self.total_supply() == self.total_demand()
    }

    /// The total cost of a shipment plan.
    ///
    /// This is the sum of the elementwise product of the plan with the
    /// cost matrix.
    pub fn plan_cost(&self, plan: &Grid<F>) -> F {
        let mut total = F::zero();
        for (i, j) in self.costs.cells() {
            total += plan[(i, j)] * self.costs[(i, j)];
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::{Problem, ProblemError};
    use crate::grid::Grid;

    #[test]
    fn accepts_well_formed() {
        let p = Problem::new(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]).unwrap();
        assert_eq!(p.num_sources(), 2);
        assert_eq!(p.num_destinations(), 2);
        assert_eq!(p.cost(1, 0), 3);
        assert!(p.is_balanced());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Problem::new(Vec::<Vec<i64>>::new(), vec![], vec![]),
            Err(ProblemError::Empty)
        ));
        assert!(matches!(
            Problem::new(vec![Vec::<i64>::new()], vec![0], vec![]),
            Err(ProblemError::Empty)
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(matches!(
            Problem::new(vec![vec![1, 2], vec![3]], vec![1, 1], vec![1, 1]),
            Err(ProblemError::ShapeMismatch { what: "cost matrix row", .. })
        ));
    }

    #[test]
    fn rejects_wrong_vector_lengths() {
        assert!(matches!(
            Problem::new(vec![vec![1, 2]], vec![1, 1], vec![1, 1]),
            Err(ProblemError::ShapeMismatch { what: "supply vector", .. })
        ));
        assert!(matches!(
            Problem::new(vec![vec![1, 2]], vec![1], vec![1]),
            Err(ProblemError::ShapeMismatch { what: "demand vector", .. })
        ));
    }

    #[test]
    fn rejects_negative_values() {
        assert!(matches!(
            Problem::new(vec![vec![1, -2], vec![3, 4]], vec![1, 1], vec![1, 1]),
            Err(ProblemError::Negative { what: "cost matrix", index: (0, 1) })
        ));
        assert!(matches!(
            Problem::new(vec![vec![1, 2]], vec![-1], vec![1, 1]),
            Err(ProblemError::Negative { what: "supply vector", .. })
        ));
        assert!(matches!(
            Problem::new(vec![vec![1, 2]], vec![1], vec![1, -1]),
            Err(ProblemError::Negative { what: "demand vector", .. })
        ));
    }

    #[test]
    fn unbalanced_is_constructible() {
        let p = Problem::new(vec![vec![1, 2], vec![3, 4]], vec![6, 4], vec![5, 3]).unwrap();
        assert!(!p.is_balanced());
        assert_eq!(p.total_supply(), 10);
        assert_eq!(p.total_demand(), 8);
    }

    #[test]
    fn plan_cost() {
        let p = Problem::new(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]).unwrap();
        let plan = Grid::from_rows(vec![vec![5, 0], vec![0, 5]]).unwrap();
        assert_eq!(p.plan_cost(&plan), 25);
    }
}
