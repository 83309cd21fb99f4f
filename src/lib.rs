//! nnmat-kernels: dense `f32` matrix kernels for small neural networks.
//!
//! The crate provides the numeric core of a feed-forward network:
//! - **Borrowed views**: column-major [`MatrixView`] / [`MatrixViewMut`] over
//!   caller-owned buffers; the kernels never allocate or free storage
//! - **Algebra**: matrix product, scaling, Hadamard product, sums
//! - **Transforms**: transpose and row/column reversal
//! - **Activations**: tanh, ReLU (max) and sigmoid with their derivatives,
//!   all in place
//!
//! [`ops`] holds the raw kernels (shapes checked by debug assertions only),
//! [`checked`] wraps each with explicit validation, and the `ffi` feature
//! exports the same surface over a C ABI.
//!
//! # Quick Start
//!
//! ```
//! use nnmat_kernels::{checked, Activation, Matrix};
//!
//! let w = Matrix::from_rows(&[&[0.5, -1.0], &[2.0, 0.0]]);
//! let x = Matrix::from_rows(&[&[1.0], &[1.0]]);
//! let mut z = Matrix::zeros(2, 1);
//!
//! checked::matmul(&w.view(), &x.view(), &mut z.view_mut())?;
//! Activation::Relu.forward_inplace(&mut z.view_mut());
//! assert_eq!(z.to_rows(), vec![vec![0.0], vec![2.0]]);
//! # Ok::<(), nnmat_kernels::KernelError>(())
//! ```

pub mod checked;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod types;
pub mod view;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use error::{KernelError, KernelResult};
pub use matrix::Matrix;
pub use types::{Activation, MatShape};
pub use view::{MatrixView, MatrixViewMut};
