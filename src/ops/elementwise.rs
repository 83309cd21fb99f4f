//! Elementwise algebra: scale, Hadamard product, addition, in-place
//! accumulation.
//!
//! Every operand has the same shape, so these walk the flat column-major
//! buffers directly.

use crate::view::{MatrixView, MatrixViewMut};

/// Scale: `C = A * k`.
#[inline(always)]
pub fn scale(a: &MatrixView<'_>, k: f32, c: &mut MatrixViewMut<'_>) {
    debug_assert_eq!(a.shape(), c.shape(), "scale shape mismatch");
    for (ci, &ai) in c.as_mut_slice().iter_mut().zip(a.as_slice()) {
        *ci = ai * k;
    }
}

/// Element-wise (Hadamard) product: `C[i,j] = A[i,j] * B[i,j]`.
#[inline(always)]
pub fn mul_elementwise(a: &MatrixView<'_>, b: &MatrixView<'_>, c: &mut MatrixViewMut<'_>) {
    debug_assert_eq!(a.shape(), b.shape(), "mul_elementwise operand shape mismatch");
    debug_assert_eq!(a.shape(), c.shape(), "mul_elementwise output shape mismatch");
    for ((ci, &ai), &bi) in c.as_mut_slice().iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *ci = ai * bi;
    }
}

/// Element-wise addition: `C = A + B`.
#[inline(always)]
pub fn add(a: &MatrixView<'_>, b: &MatrixView<'_>, c: &mut MatrixViewMut<'_>) {
    debug_assert_eq!(a.shape(), b.shape(), "add operand shape mismatch");
    debug_assert_eq!(a.shape(), c.shape(), "add output shape mismatch");
    for ((ci, &ai), &bi) in c.as_mut_slice().iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *ci = ai + bi;
    }
}

/// Element-wise addition in-place: `A = A + B`.
#[inline(always)]
pub fn add_inplace(a: &mut MatrixViewMut<'_>, b: &MatrixView<'_>) {
    debug_assert_eq!(a.shape(), b.shape(), "add_inplace shape mismatch");
    for (ai, &bi) in a.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *ai += bi;
    }
}

/// Element-wise subtraction in-place: `A = A - B`.
#[inline(always)]
pub fn sub_inplace(a: &mut MatrixViewMut<'_>, b: &MatrixView<'_>) {
    debug_assert_eq!(a.shape(), b.shape(), "sub_inplace shape mismatch");
    for (ai, &bi) in a.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *ai -= bi;
    }
}
