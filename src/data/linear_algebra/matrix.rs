//! # Matrix implementations
//!
//! A dense, square matrix stored row-major in a single allocation. Dimensions are fixed at
//! creation.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Index, IndexMut};
use std::slice::Chunks;

use crate::data::number_types::traits::Integer;

/// Width of a single printed value, including the padding.
const CELL_WIDTH: usize = 5;

/// Square matrix indexed by `(row, column)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    order: usize,
}

impl<T: Integer> SquareMatrix<T> {
    /// Create a matrix of zero's of dimension `order` x `order`.
    ///
    /// # Panics
    ///
    /// If `order * order` doesn't fit in a `usize`.
    pub fn zeros(order: usize) -> Self {
        let Some(size) = order.checked_mul(order) else {
            panic!("a matrix of order {} is too large", order);
        };

        Self {
            data: vec![T::zero(); size],
            order,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let order = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == order));

        Self {
            data: rows.into_iter().flatten().collect(),
            order,
        }
    }

    /// Number of rows, which equals the number of columns.
    pub fn order(&self) -> usize {
        self.order
    }

    #[cfg(test)]
    pub(crate) fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.order);

        &self.data[i * self.order..(i + 1) * self.order]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Chunks<'_, T> {
        // `chunks` panics on a zero chunk size; an empty matrix has no data to chunk anyway.
        self.data.chunks(self.order.max(1))
    }

    /// Whether every value is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|value| value.is_zero())
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.order && j < self.order, "index ({}, {}) out of range for order {}", i, j, self.order);

        &self.data[i * self.order + j]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.order && j < self.order, "index ({}, {}) out of range for order {}", i, j, self.order);

        &mut self.data[i * self.order + j]
    }
}

impl<T: Integer> Display for SquareMatrix<T> {
    /// Column counter on top, row counter on the left, every value right-aligned.
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        // Column counter
        write!(f, "{0:width$}", "", width = CELL_WIDTH)?;
        for column in 0..self.order {
            write!(f, "{0:>width$}", column, width = CELL_WIDTH)?;
        }
        writeln!(f)?;

        // Row counter and row data
        for (i, row) in self.rows().enumerate().take(self.order) {
            write!(f, "{0:>width$}", i, width = CELL_WIDTH)?;
            for value in row {
                write!(f, "{0:>width$}", value, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
