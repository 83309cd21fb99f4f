//! Matrix product over column-major views.

use crate::types::MatShape;
use crate::view::{MatrixView, MatrixViewMut};

/// Matrix multiplication: `C = A * B`.
///
/// Where:
/// - A is [M, K]
/// - B is [K, N]
/// - C is [M, N], written from scratch (prior contents are discarded)
///
/// Walks C one column at a time: `C[:, j] = sum_p A[:, p] * B[p, j]`, so
/// every inner loop runs over contiguous column slices. Accumulation is in
/// f32, in ascending `p` order.
///
/// Shapes are checked by debug assertions only; see `checked::matmul`.
#[inline(always)]
pub fn matmul(a: &MatrixView<'_>, b: &MatrixView<'_>, c: &mut MatrixViewMut<'_>) {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());

    debug_assert_eq!(b.rows(), k, "A cols must equal B rows");
    debug_assert_eq!(c.shape(), MatShape::new(m, n), "C matrix shape mismatch");

    for j in 0..n {
        let b_col = b.column(j);
        let c_col = c.column_mut(j);
        c_col.fill(0.0);
        for (p, &b_pj) in b_col.iter().enumerate() {
            for (c_ij, &a_ip) in c_col.iter_mut().zip(a.column(p)) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
}
