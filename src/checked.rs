//! Validating wrappers around the unchecked kernels.
//!
//! Each function mirrors its counterpart in [`crate::ops`], verifies operand
//! and destination shapes, and only then delegates. Rejections are logged at
//! debug level and returned as [`KernelError`]; the destination is left
//! untouched on error.
//!
//! Aliasing needs no runtime check here: a [`MatrixViewMut`] can't overlap a
//! [`MatrixView`] in safe code.

use crate::error::{KernelError, KernelResult};
use crate::ops;
use crate::types::MatShape;
use crate::view::{MatrixView, MatrixViewMut};

#[inline]
fn reject(op: &'static str, err: KernelError) -> KernelError {
    log::debug!("{op} rejected: {err}");
    err
}

/// Require `got == expected`.
#[inline]
pub fn ensure_shape(op: &'static str, expected: MatShape, got: MatShape) -> KernelResult<()> {
    if expected != got {
        return Err(reject(op, KernelError::ShapeMismatch { op, expected, got }));
    }
    Ok(())
}

/// Shape `C` must have for `C = A * B`.
#[inline]
pub fn matmul_output_shape(lhs: MatShape, rhs: MatShape) -> KernelResult<MatShape> {
    if lhs.cols != rhs.rows {
        return Err(reject("matmul", KernelError::InnerDimMismatch { lhs, rhs }));
    }
    Ok(MatShape::new(lhs.rows, rhs.cols))
}

pub fn matmul(a: &MatrixView<'_>, b: &MatrixView<'_>, c: &mut MatrixViewMut<'_>) -> KernelResult<()> {
    let expected = matmul_output_shape(a.shape(), b.shape())?;
    ensure_shape("matmul", expected, c.shape())?;
    ops::matmul(a, b, c);
    Ok(())
}

pub fn scale(a: &MatrixView<'_>, k: f32, c: &mut MatrixViewMut<'_>) -> KernelResult<()> {
    ensure_shape("scale", a.shape(), c.shape())?;
    ops::scale(a, k, c);
    Ok(())
}

pub fn mul_elementwise(
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
    c: &mut MatrixViewMut<'_>,
) -> KernelResult<()> {
    ensure_shape("mul_elementwise", a.shape(), b.shape())?;
    ensure_shape("mul_elementwise", a.shape(), c.shape())?;
    ops::mul_elementwise(a, b, c);
    Ok(())
}

pub fn add(a: &MatrixView<'_>, b: &MatrixView<'_>, c: &mut MatrixViewMut<'_>) -> KernelResult<()> {
    ensure_shape("add", a.shape(), b.shape())?;
    ensure_shape("add", a.shape(), c.shape())?;
    ops::add(a, b, c);
    Ok(())
}

pub fn add_inplace(a: &mut MatrixViewMut<'_>, b: &MatrixView<'_>) -> KernelResult<()> {
    ensure_shape("add_inplace", a.shape(), b.shape())?;
    ops::add_inplace(a, b);
    Ok(())
}

pub fn sub_inplace(a: &mut MatrixViewMut<'_>, b: &MatrixView<'_>) -> KernelResult<()> {
    ensure_shape("sub_inplace", a.shape(), b.shape())?;
    ops::sub_inplace(a, b);
    Ok(())
}

pub fn transpose(m: &MatrixView<'_>, r: &mut MatrixViewMut<'_>) -> KernelResult<()> {
    ensure_shape("transpose", m.shape().transposed(), r.shape())?;
    ops::transpose(m, r);
    Ok(())
}

pub fn reverse_columns(m: &MatrixView<'_>, r: &mut MatrixViewMut<'_>) -> KernelResult<()> {
    ensure_shape("reverse_columns", m.shape(), r.shape())?;
    ops::reverse_columns(m, r);
    Ok(())
}

pub fn reverse_rows(m: &MatrixView<'_>, r: &mut MatrixViewMut<'_>) -> KernelResult<()> {
    ensure_shape("reverse_rows", m.shape(), r.shape())?;
    ops::reverse_rows(m, r);
    Ok(())
}
