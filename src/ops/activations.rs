//! In-place activation functions and their derivatives.
//!
//! # Supported Activations
//!
//! - **Tanh**: `tanh(x)`, derivative `1 - tanh(x)^2`
//! - **ReLU** (max): `max(0, x)`, derivative `x < 0 ? 0 : 1`
//! - **Sigmoid**: `e^x / (e^x + 1)`, derivative `e^x / (e^x + 1)^2`
//!
//! # Design
//!
//! Every operation overwrites its operand: an activation turns a layer's
//! pre-activation buffer into its output, a derivative turns a copy of the
//! pre-activation buffer into `f'(x)`. Derivatives are evaluated at the
//! stored value, which is taken to be the pre-activation `x`, never the
//! already-activated output.
//!
//! Sigmoid is the plain `e^x / (e^x + 1)` form with no range reduction:
//! for `x` above roughly 88.7, `e^x` overflows and the result is NaN.

use crate::view::MatrixViewMut;

#[inline(always)]
fn map_inplace(m: &mut MatrixViewMut<'_>, f: impl Fn(f32) -> f32) {
    for x in m.as_mut_slice().iter_mut() {
        *x = f(*x);
    }
}

// ============================================================================
// Scalar forms
// ============================================================================

/// `max(0, x)`, written as `0 > x ? 0 : x` so NaN and `-0.0` pass through.
#[inline(always)]
pub fn relu_scalar(x: f32) -> f32 {
    if 0.0 > x {
        0.0
    } else {
        x
    }
}

/// ReLU subgradient: 0 below zero, 1 at and above zero.
#[inline(always)]
pub fn relu_derivative_scalar(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else {
        1.0
    }
}

/// `e^x / (e^x + 1)`.
#[inline(always)]
pub fn sigmoid_scalar(x: f32) -> f32 {
    let e = x.exp();
    e / (e + 1.0)
}

/// `e^x / (e^x + 1)^2`.
#[inline(always)]
pub fn sigmoid_derivative_scalar(x: f32) -> f32 {
    let e = x.exp();
    let d = e + 1.0;
    e / (d * d)
}

/// `1 - tanh(x)^2`.
#[inline(always)]
pub fn tanh_derivative_scalar(x: f32) -> f32 {
    let t = x.tanh();
    1.0 - t * t
}

// ============================================================================
// Tanh
// ============================================================================

/// Tanh activation in-place.
#[inline(always)]
pub fn tanh_inplace(m: &mut MatrixViewMut<'_>) {
    map_inplace(m, f32::tanh);
}

/// Tanh derivative in-place: `x = 1 - tanh(x)^2`.
#[inline(always)]
pub fn tanh_derivative_inplace(m: &mut MatrixViewMut<'_>) {
    map_inplace(m, tanh_derivative_scalar);
}

// ============================================================================
// ReLU (max)
// ============================================================================

/// ReLU activation in-place: `x = max(0, x)`.
#[inline(always)]
pub fn relu_inplace(m: &mut MatrixViewMut<'_>) {
    map_inplace(m, relu_scalar);
}

/// ReLU derivative in-place: `x = x < 0 ? 0 : 1`.
#[inline(always)]
pub fn relu_derivative_inplace(m: &mut MatrixViewMut<'_>) {
    map_inplace(m, relu_derivative_scalar);
}

// ============================================================================
// Sigmoid
// ============================================================================

/// Sigmoid activation in-place: `x = e^x / (e^x + 1)`.
#[inline(always)]
pub fn sigmoid_inplace(m: &mut MatrixViewMut<'_>) {
    map_inplace(m, sigmoid_scalar);
}

/// Sigmoid derivative in-place: `x = e^x / (e^x + 1)^2`.
#[inline(always)]
pub fn sigmoid_derivative_inplace(m: &mut MatrixViewMut<'_>) {
    map_inplace(m, sigmoid_derivative_scalar);
}
