//! Owned column-major matrix for the calling side.
//!
//! The kernels only ever see views; `Matrix` is a convenience for hosts and
//! tests that want to own a buffer and hand out views over it:
//!
//! ```
//! use nnmat_kernels::{ops, Matrix};
//!
//! let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
//! let mut c = Matrix::zeros(2, 2);
//! ops::matmul(&a.view(), &Matrix::identity(2).view(), &mut c.view_mut());
//! assert_eq!(c, a);
//! ```

use std::fmt;

use crate::view::{MatrixView, MatrixViewMut};

/// A `rows × cols` matrix owning its column-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Wrap column-major `data` of length `rows * cols`.
    #[inline(always)]
    pub fn from_col_major(data: Vec<f32>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols, "Data length must match rows * cols");
        Self { data, rows, cols }
    }

    /// Build from row literals; every row must have the same length.
    pub fn from_rows(rows: &[&[f32]]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = vec![0.0; n_rows * n_cols];
        for (i, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), n_cols, "ragged row {i}");
            for (j, &v) in row.iter().enumerate() {
                data[j * n_rows + i] = v;
            }
        }
        Self {
            data,
            rows: n_rows,
            cols: n_cols,
        }
    }

    /// Create a zero-initialized matrix.
    #[inline(always)]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.view().get(i, j)
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.view_mut().set(i, j, value);
    }

    #[inline(always)]
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView::new(&self.data, self.rows, self.cols)
    }

    #[inline(always)]
    pub fn view_mut(&mut self) -> MatrixViewMut<'_> {
        MatrixViewMut::new(&mut self.data, self.rows, self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.view().to_rows()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_from_rows_is_column_major() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_matrix_identity() {
        let i3 = Matrix::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(i3.get(r, c), if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_matrix_set_and_display() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 1, 2.5);
        assert_eq!(format!("{m}"), "[[0, 2.5], [0, 0]]");
        assert_eq!(m.into_vec(), vec![0.0, 0.0, 2.5, 0.0]);
    }

    #[test]
    fn test_matrix_from_rows_empty() {
        let m = Matrix::from_rows(&[]);
        assert!(m.is_empty());
        assert_eq!((m.rows(), m.cols()), (0, 0));
    }
}
