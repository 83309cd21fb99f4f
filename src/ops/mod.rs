//! Unchecked kernels.
//!
//! Callers guarantee shape compatibility; violations trip debug assertions
//! in test builds and are otherwise unspecified (an out-of-range slice index
//! panics, nothing reads out of bounds). The [`crate::checked`] module wraps
//! each of these with explicit validation.

pub mod activations;
pub mod elementwise;
pub mod matmul;
pub mod transform;

pub use activations::{
    relu_derivative_inplace, relu_derivative_scalar, relu_inplace, relu_scalar,
    sigmoid_derivative_inplace, sigmoid_derivative_scalar, sigmoid_inplace, sigmoid_scalar,
    tanh_derivative_inplace, tanh_derivative_scalar, tanh_inplace,
};
pub use elementwise::{add, add_inplace, mul_elementwise, scale, sub_inplace};
pub use matmul::matmul;
pub use transform::{reverse_columns, reverse_rows, transpose};
