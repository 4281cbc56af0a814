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

//! A dense row-major matrix.
//!
//! The solver works on a complete bipartite cost tableau, so the cost
//! matrix, the shipment plan and the basis mask are all dense `m×n`
//! grids. Cells are addressed by `(row, column)` pairs.

use std::ops::{Index, IndexMut};

/// A dense `m×n` matrix stored in a flat row-major vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    num_rows: usize,
    num_cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Create a grid with all cells set to `value`.
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self {
        Grid {
            num_rows,
            num_cols,
            data: vec![value; num_rows * num_cols],
        }
    }

    /// Create a grid from a vector of equally sized rows.
    ///
    /// Returns `None` if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != num_cols) {
            return None;
        }
        Some(Grid {
            num_rows,
            num_cols,
            data: rows.into_iter().flatten().collect(),
        })
    }
}

impl<T> Grid<T> {
    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// The number of columns.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Iterate over all cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let num_cols = self.num_cols;
        (0..self.num_rows).flat_map(move |i| (0..num_cols).map(move |j| (i, j)))
    }

    /// Iterate over the values of row `i`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = &T> + '_ {
        self.data[i * self.num_cols..(i + 1) * self.num_cols].iter()
    }

    /// Iterate over the values of column `j`.
    pub fn col(&self, j: usize) -> impl Iterator<Item = &T> + '_ {
        self.data[j..].iter().step_by(self.num_cols)
    }

    /// Iterate over all values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.num_rows && j < self.num_cols);
        &self.data[i * self.num_cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.num_rows && j < self.num_cols);
        &mut self.data[i * self.num_cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn filled_and_index() {
        let mut g = Grid::filled(2, 3, 0);
        g[(0, 2)] = 7;
        g[(1, 0)] = 5;
        assert_eq!(g[(0, 2)], 7);
        assert_eq!(g[(1, 0)], 5);
        assert_eq!(g[(1, 2)], 0);
        assert_eq!(g.num_rows(), 2);
        assert_eq!(g.num_cols(), 3);
    }

    #[test]
    fn from_rows() {
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(g[(0, 1)], 2);
        assert_eq!(g[(1, 0)], 3);
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn rows_cols_cells() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.row(1).copied().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(g.col(2).copied().collect::<Vec<_>>(), vec![3, 6]);
        assert_eq!(
            g.cells().collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }
}
