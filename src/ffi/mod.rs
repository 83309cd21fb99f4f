//! C ABI wrapper for nnmat-kernels.
//!
//! Provides `#[no_mangle] extern "C"` functions for use from C/C++/Python.
//! All functions return `NnmatStatus` codes and use opaque view handles.
//! A handle describes a caller-owned buffer; the library never frees or
//! reallocates the buffer itself.
//!
//! Every call validates its handles and shapes before touching memory, and
//! refuses a destination that overlaps one of its sources.

pub mod types;

pub use types::{NnmatStatus, NnmatView};

use std::ffi::c_char;

use crate::checked;
use crate::error::{KernelError, KernelResult};
use crate::ops;
use crate::view::MatrixViewMut;
use types::RawMatrix;

/// Resolve a handle to its descriptor.
///
/// # Safety
/// `h` must be null or a live handle from `nnmat_view_create`.
#[inline(always)]
unsafe fn raw<'h>(h: NnmatView, arg: &'static str) -> KernelResult<&'h RawMatrix> {
    (h as *const RawMatrix)
        .as_ref()
        .ok_or(KernelError::InvalidHandle(arg))
}

#[inline(always)]
fn disjoint(op: &'static str, dst: &RawMatrix, src: &RawMatrix) -> KernelResult<()> {
    if dst.overlaps(src) {
        return Err(KernelError::Aliased(op));
    }
    Ok(())
}

/// Map a result to its status code, logging rejections.
#[inline(always)]
fn status(op: &'static str, res: KernelResult<()>) -> i32 {
    match res {
        Ok(()) => NnmatStatus::Ok as i32,
        Err(e) => {
            log::warn!("nnmat_{op}: {e}");
            NnmatStatus::from(e) as i32
        }
    }
}

// ── View lifecycle ──────────────────────────────────────────────────

/// Describe a caller-owned column-major buffer of `rows * cols` floats.
///
/// # Safety
/// `data` must point to at least `rows * cols` valid, f32-aligned values
/// that outlive the handle. `out` must point to a valid `NnmatView` slot.
#[no_mangle]
pub unsafe extern "C" fn nnmat_view_create(
    data: *mut f32,
    rows: i32,
    cols: i32,
    out: *mut NnmatView,
) -> i32 {
    if out.is_null() {
        return status("view_create", Err(KernelError::NullPointer("out")));
    }
    match RawMatrix::new(data, rows, cols) {
        Ok(desc) => {
            let handle = Box::into_raw(Box::new(desc)) as NnmatView;
            log::trace!("nnmat_view_create: {rows}x{cols} -> {handle:p}");
            *out = handle;
            NnmatStatus::Ok as i32
        }
        Err(e) => status("view_create", Err(e)),
    }
}

/// Destroy a view handle. The underlying buffer is untouched.
///
/// # Safety
/// `view` must be a handle returned by `nnmat_view_create`, or null, and must
/// not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn nnmat_view_destroy(view: NnmatView) {
    if !view.is_null() {
        log::trace!("nnmat_view_destroy: {view:p}");
        drop(Box::from_raw(view as *mut RawMatrix));
    }
}

/// Row count of a view, or -1 for a null handle.
///
/// # Safety
/// `view` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_view_rows(view: NnmatView) -> i64 {
    raw(view, "view").map_or(-1, |m| m.shape().rows as i64)
}

/// Column count of a view, or -1 for a null handle.
///
/// # Safety
/// `view` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_view_cols(view: NnmatView) -> i64 {
    raw(view, "view").map_or(-1, |m| m.shape().cols as i64)
}

/// Library version as a static NUL-terminated string.
#[no_mangle]
pub extern "C" fn nnmat_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

// ── Algebra ─────────────────────────────────────────────────────────

/// `C = A * B`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_multiply(a: NnmatView, b: NnmatView, c: NnmatView) -> i32 {
    status(
        "multiply",
        (|| {
            let (a, b, c) = (raw(a, "a")?, raw(b, "b")?, raw(c, "c")?);
            disjoint("multiply", c, a)?;
            disjoint("multiply", c, b)?;
            checked::matmul(&a.view(), &b.view(), &mut c.view_mut())
        })(),
    )
}

/// `C = A * k`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_multiply_constant(a: NnmatView, k: f32, c: NnmatView) -> i32 {
    status(
        "multiply_constant",
        (|| {
            let (a, c) = (raw(a, "a")?, raw(c, "c")?);
            disjoint("multiply_constant", c, a)?;
            checked::scale(&a.view(), k, &mut c.view_mut())
        })(),
    )
}

/// `C = A ∘ B`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_elementwise_multiply(
    a: NnmatView,
    b: NnmatView,
    c: NnmatView,
) -> i32 {
    status(
        "elementwise_multiply",
        (|| {
            let (a, b, c) = (raw(a, "a")?, raw(b, "b")?, raw(c, "c")?);
            disjoint("elementwise_multiply", c, a)?;
            disjoint("elementwise_multiply", c, b)?;
            checked::mul_elementwise(&a.view(), &b.view(), &mut c.view_mut())
        })(),
    )
}

/// `C = A + B`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_add(a: NnmatView, b: NnmatView, c: NnmatView) -> i32 {
    status(
        "add",
        (|| {
            let (a, b, c) = (raw(a, "a")?, raw(b, "b")?, raw(c, "c")?);
            disjoint("add", c, a)?;
            disjoint("add", c, b)?;
            checked::add(&a.view(), &b.view(), &mut c.view_mut())
        })(),
    )
}

/// `A += B`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_add_in_place(a: NnmatView, b: NnmatView) -> i32 {
    status(
        "add_in_place",
        (|| {
            let (a, b) = (raw(a, "a")?, raw(b, "b")?);
            disjoint("add_in_place", a, b)?;
            checked::add_inplace(&mut a.view_mut(), &b.view())
        })(),
    )
}

/// `A -= B`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_sub_in_place(a: NnmatView, b: NnmatView) -> i32 {
    status(
        "sub_in_place",
        (|| {
            let (a, b) = (raw(a, "a")?, raw(b, "b")?);
            disjoint("sub_in_place", a, b)?;
            checked::sub_inplace(&mut a.view_mut(), &b.view())
        })(),
    )
}

// ── Transforms ──────────────────────────────────────────────────────

/// `R = Aᵗ`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_transpose(a: NnmatView, r: NnmatView) -> i32 {
    status(
        "transpose",
        (|| {
            let (a, r) = (raw(a, "a")?, raw(r, "r")?);
            disjoint("transpose", r, a)?;
            checked::transpose(&a.view(), &mut r.view_mut())
        })(),
    )
}

/// `R[i, j] = A[i, cols - 1 - j]`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_columnwise_reverse(a: NnmatView, r: NnmatView) -> i32 {
    status(
        "columnwise_reverse",
        (|| {
            let (a, r) = (raw(a, "a")?, raw(r, "r")?);
            disjoint("columnwise_reverse", r, a)?;
            checked::reverse_columns(&a.view(), &mut r.view_mut())
        })(),
    )
}

/// `R[i, j] = A[rows - 1 - i, j]`.
///
/// # Safety
/// All handles must be null or live, with their buffers still valid.
#[no_mangle]
pub unsafe extern "C" fn nnmat_rowwise_reverse(a: NnmatView, r: NnmatView) -> i32 {
    status(
        "rowwise_reverse",
        (|| {
            let (a, r) = (raw(a, "a")?, raw(r, "r")?);
            disjoint("rowwise_reverse", r, a)?;
            checked::reverse_rows(&a.view(), &mut r.view_mut())
        })(),
    )
}

// ── Activations ─────────────────────────────────────────────────────

/// Apply an in-place kernel to a single handle.
///
/// # Safety
/// `a` must be null or a live handle.
#[inline(always)]
unsafe fn unary(op: &'static str, a: NnmatView, f: fn(&mut MatrixViewMut<'_>)) -> i32 {
    status(
        op,
        raw(a, "a").map(|a| {
            let mut m = a.view_mut();
            f(&mut m);
        }),
    )
}

/// `A = tanh(A)`.
///
/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_tanh_activation(a: NnmatView) -> i32 {
    unary("tanh_activation", a, ops::tanh_inplace)
}

/// `A = 1 - tanh(A)^2`.
///
/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_tanh_derivative(a: NnmatView) -> i32 {
    unary("tanh_derivative", a, ops::tanh_derivative_inplace)
}

/// `A = max(0, A)`.
///
/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_max_activation(a: NnmatView) -> i32 {
    unary("max_activation", a, ops::relu_inplace)
}

/// `A = A < 0 ? 0 : 1`.
///
/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_max_derivative(a: NnmatView) -> i32 {
    unary("max_derivative", a, ops::relu_derivative_inplace)
}

/// `A = e^A / (e^A + 1)`.
///
/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_sigmoid_activation(a: NnmatView) -> i32 {
    unary("sigmoid_activation", a, ops::sigmoid_inplace)
}

/// `A = e^A / (e^A + 1)^2`.
///
/// # Safety
/// `a` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn nnmat_sigmoid_derivative(a: NnmatView) -> i32 {
    unary("sigmoid_derivative", a, ops::sigmoid_derivative_inplace)
}
