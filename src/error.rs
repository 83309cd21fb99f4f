use thiserror::Error;

use crate::types::MatShape;

/// Failures reported by the validating layers (`checked`, view constructors,
/// and the C ABI boundary). The unchecked kernels never produce these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("{op}: shape mismatch, expected {expected}, got {got}")]
    ShapeMismatch {
        op: &'static str,
        expected: MatShape,
        got: MatShape,
    },
    #[error("matmul inner dimensions differ: [{lhs}] x [{rhs}]")]
    InnerDimMismatch { lhs: MatShape, rhs: MatShape },
    #[error("buffer too small: need {required} f32 values, have {available}")]
    BufferTooSmall { required: usize, available: usize },
    #[error("invalid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },
    #[error("null pointer: {0}")]
    NullPointer(&'static str),
    #[error("invalid handle: {0}")]
    InvalidHandle(&'static str),
    #[error("{0}: destination overlaps a source buffer")]
    Aliased(&'static str),
    #[error("byte buffer cannot be viewed as f32: {0}")]
    Cast(String),
    #[error("unknown activation '{0}' (expected tanh, relu or sigmoid)")]
    UnknownActivation(String),
}

pub type KernelResult<T> = Result<T, KernelError>;

impl From<bytemuck::PodCastError> for KernelError {
    fn from(err: bytemuck::PodCastError) -> Self {
        KernelError::Cast(format!("{err:?}"))
    }
}
