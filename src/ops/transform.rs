//! Shape transforms: transpose and axis reversal.

use crate::view::{MatrixView, MatrixViewMut};

/// Transpose: `R = Mᵗ`.
///
/// `R` must be `M.cols × M.rows`.
#[inline(always)]
pub fn transpose(m: &MatrixView<'_>, r: &mut MatrixViewMut<'_>) {
    debug_assert_eq!(r.shape(), m.shape().transposed(), "transpose output shape mismatch");
    let cols = m.cols();
    let out = r.as_mut_slice();
    // M[i, j] = m.column(j)[i] lands at R[j, i] = out[i * cols + j]
    for j in 0..cols {
        for (i, &v) in m.column(j).iter().enumerate() {
            out[i * cols + j] = v;
        }
    }
}

/// Reverse the order of the columns (left-right mirror):
/// `R[i, j] = M[i, cols - 1 - j]`.
#[inline(always)]
pub fn reverse_columns(m: &MatrixView<'_>, r: &mut MatrixViewMut<'_>) {
    debug_assert_eq!(r.shape(), m.shape(), "reverse_columns shape mismatch");
    let cols = m.cols();
    for j in 0..cols {
        r.column_mut(j).copy_from_slice(m.column(cols - 1 - j));
    }
}

/// Reverse the order of the rows (top-bottom mirror):
/// `R[i, j] = M[rows - 1 - i, j]`.
#[inline(always)]
pub fn reverse_rows(m: &MatrixView<'_>, r: &mut MatrixViewMut<'_>) {
    debug_assert_eq!(r.shape(), m.shape(), "reverse_rows shape mismatch");
    for j in 0..m.cols() {
        for (dst, &src) in r.column_mut(j).iter_mut().zip(m.column(j).iter().rev()) {
            *dst = src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [[1, 2, 3],
    //  [4, 5, 6]]
    const M23: [f32; 6] = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];

    #[test]
    fn test_transpose() {
        let mut out = [0.0f32; 6];
        transpose(&MatrixView::new(&M23, 2, 3), &mut MatrixViewMut::new(&mut out, 3, 2));
        let r = MatrixView::new(&out, 3, 2);
        assert_eq!(r.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn test_transpose_vector() {
        let col = [1.0f32, 2.0, 3.0];
        let mut row = [0.0f32; 3];
        transpose(&MatrixView::new(&col, 3, 1), &mut MatrixViewMut::new(&mut row, 1, 3));
        // a vector's storage is the same either way
        assert_eq!(row, col);
    }

    #[test]
    fn test_reverse_columns() {
        let mut out = [0.0f32; 6];
        reverse_columns(&MatrixView::new(&M23, 2, 3), &mut MatrixViewMut::new(&mut out, 2, 3));
        let r = MatrixView::new(&out, 2, 3);
        assert_eq!(r.to_rows(), vec![vec![3.0, 2.0, 1.0], vec![6.0, 5.0, 4.0]]);
    }

    #[test]
    fn test_reverse_rows() {
        // [[1,2],[3,4]] -> [[3,4],[1,2]]
        let m = [1.0f32, 3.0, 2.0, 4.0];
        let mut out = [0.0f32; 4];
        reverse_rows(&MatrixView::new(&m, 2, 2), &mut MatrixViewMut::new(&mut out, 2, 2));
        let r = MatrixView::new(&out, 2, 2);
        assert_eq!(r.to_rows(), vec![vec![3.0, 4.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn test_reverse_rows_odd_height_keeps_middle() {
        let m = [1.0f32, 2.0, 3.0];
        let mut out = [0.0f32; 3];
        reverse_rows(&MatrixView::new(&m, 3, 1), &mut MatrixViewMut::new(&mut out, 3, 1));
        assert_eq!(out, [3.0, 2.0, 1.0]);
    }
}
