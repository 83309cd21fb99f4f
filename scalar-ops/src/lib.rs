//! Scalar operator implementations: pure `extern "C"` scalar functions.
//!
//! Golden references for the `nnmat-kernels` operation set. Each function is
//! the most literal loop for its formula, walking raw pointers in
//! column-major order (element `(i, j)` of an `rows × cols` matrix lives at
//! `j * rows + i`).
//!
//! This crate is compiled with `opt-level = 1` (configured in the workspace
//! root Cargo.toml) so the loops stay naive and independent of whatever the
//! optimizer does to the main crate's kernels.

pub mod activations;
pub mod blas;
