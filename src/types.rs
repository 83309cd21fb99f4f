//! Shape and activation selector types shared by the views and kernels.

use std::fmt;
use std::str::FromStr;

use crate::error::KernelError;
use crate::ops::activations;
use crate::view::MatrixViewMut;

/// Rows × columns of a column-major matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatShape {
    pub rows: usize,
    pub cols: usize,
}

impl MatShape {
    #[inline(always)]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of elements (`rows * cols`).
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Shape with rows and columns swapped.
    #[inline(always)]
    pub const fn transposed(self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Element count with overflow check.
    pub fn checked_len(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

impl fmt::Display for MatShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for MatShape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

/// Activation function selector.
///
/// A dense layer picks one of these and applies `forward_inplace` to its
/// pre-activation buffer, then `derivative_inplace` to a copy of the same
/// pre-activation during backprop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
}

impl Activation {
    pub const ALL: [Activation; 3] = [Activation::Tanh, Activation::Relu, Activation::Sigmoid];

    pub fn name(self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
        }
    }

    /// `f(x)` for a single value.
    #[inline(always)]
    pub fn apply_scalar(self, x: f32) -> f32 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => activations::relu_scalar(x),
            Activation::Sigmoid => activations::sigmoid_scalar(x),
        }
    }

    /// `f'(x)` for a single pre-activation value.
    #[inline(always)]
    pub fn derivative_scalar(self, x: f32) -> f32 {
        match self {
            Activation::Tanh => activations::tanh_derivative_scalar(x),
            Activation::Relu => activations::relu_derivative_scalar(x),
            Activation::Sigmoid => activations::sigmoid_derivative_scalar(x),
        }
    }

    /// Apply the activation to every element of `m` in place.
    pub fn forward_inplace(self, m: &mut MatrixViewMut<'_>) {
        match self {
            Activation::Tanh => activations::tanh_inplace(m),
            Activation::Relu => activations::relu_inplace(m),
            Activation::Sigmoid => activations::sigmoid_inplace(m),
        }
    }

    /// Replace every element of `m` with the derivative evaluated at it.
    pub fn derivative_inplace(self, m: &mut MatrixViewMut<'_>) {
        match self {
            Activation::Tanh => activations::tanh_derivative_inplace(m),
            Activation::Relu => activations::relu_derivative_inplace(m),
            Activation::Sigmoid => activations::sigmoid_derivative_inplace(m),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" | "max" => Ok(Activation::Relu),
            "sigmoid" | "logistic" => Ok(Activation::Sigmoid),
            _ => Err(KernelError::UnknownActivation(s.to_string())),
        }
    }
}
