//! C ABI types: opaque handles and status codes for FFI consumers.

use std::mem::size_of;

use crate::error::{KernelError, KernelResult};
use crate::types::MatShape;
use crate::view::{MatrixView, MatrixViewMut};

/// Status codes returned by C ABI functions.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NnmatStatus {
    Ok = 0,
    InvalidArg = -1,
    InvalidHandle = -2,
    ShapeMismatch = -3,
    Aliased = -4,
}

impl From<KernelError> for NnmatStatus {
    fn from(e: KernelError) -> Self {
        match e {
            KernelError::ShapeMismatch { .. } | KernelError::InnerDimMismatch { .. } => {
                NnmatStatus::ShapeMismatch
            }
            KernelError::InvalidHandle(_) => NnmatStatus::InvalidHandle,
            KernelError::Aliased(_) => NnmatStatus::Aliased,
            KernelError::BufferTooSmall { .. }
            | KernelError::InvalidDimensions { .. }
            | KernelError::NullPointer(_)
            | KernelError::Cast(_)
            | KernelError::UnknownActivation(_) => NnmatStatus::InvalidArg,
        }
    }
}

/// Opaque handle to a matrix view descriptor.
pub type NnmatView = *mut std::ffi::c_void;

/// Descriptor behind an [`NnmatView`]: the caller's buffer plus its shape.
///
/// The descriptor never owns `data`; destroying the handle frees only this
/// struct.
#[derive(Debug)]
pub(crate) struct RawMatrix {
    data: *mut f32,
    rows: usize,
    cols: usize,
}

impl RawMatrix {
    /// Validate the raw arguments of `nnmat_view_create`.
    pub(crate) fn new(data: *mut f32, rows: i32, cols: i32) -> KernelResult<Self> {
        let invalid = KernelError::InvalidDimensions {
            rows: rows as i64,
            cols: cols as i64,
        };
        if rows < 0 || cols < 0 {
            return Err(invalid);
        }
        let (rows, cols) = (rows as usize, cols as usize);
        let len = MatShape::new(rows, cols).checked_len().ok_or(invalid.clone())?;
        // slices must stay below isize::MAX bytes
        if len
            .checked_mul(size_of::<f32>())
            .map_or(true, |bytes| bytes > isize::MAX as usize)
        {
            return Err(invalid);
        }
        if data.is_null() {
            return Err(KernelError::NullPointer("data"));
        }
        if (data as usize) % std::mem::align_of::<f32>() != 0 {
            return Err(KernelError::Cast("data pointer is not f32-aligned".into()));
        }
        Ok(Self { data, rows, cols })
    }

    #[inline(always)]
    pub(crate) fn shape(&self) -> MatShape {
        MatShape::new(self.rows, self.cols)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Half-open byte range `[start, end)` covered by the view.
    #[inline(always)]
    fn byte_range(&self) -> (usize, usize) {
        let start = self.data as usize;
        (start, start + self.len() * size_of::<f32>())
    }

    /// Whether the two descriptors address any common element.
    pub(crate) fn overlaps(&self, other: &RawMatrix) -> bool {
        if self.len() == 0 || other.len() == 0 {
            return false;
        }
        let (a0, a1) = self.byte_range();
        let (b0, b1) = other.byte_range();
        a0 < b1 && b0 < a1
    }

    /// # Safety
    /// The buffer must still be live and hold `rows * cols` values, and no
    /// exclusive view over it may exist for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn view<'a>(&self) -> MatrixView<'a> {
        let data = std::slice::from_raw_parts(self.data as *const f32, self.len());
        MatrixView::new(data, self.rows, self.cols)
    }

    /// # Safety
    /// The buffer must still be live and hold `rows * cols` values, and no
    /// other view over it may exist for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn view_mut<'a>(&self) -> MatrixViewMut<'a> {
        let data = std::slice::from_raw_parts_mut(self.data, self.len());
        MatrixViewMut::new(data, self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_error() {
        let shape = MatShape::new(1, 1);
        assert_eq!(
            NnmatStatus::from(KernelError::InnerDimMismatch { lhs: shape, rhs: shape }),
            NnmatStatus::ShapeMismatch
        );
        assert_eq!(
            NnmatStatus::from(KernelError::InvalidHandle("a")),
            NnmatStatus::InvalidHandle
        );
        assert_eq!(NnmatStatus::from(KernelError::Aliased("add")), NnmatStatus::Aliased);
        assert_eq!(
            NnmatStatus::from(KernelError::InvalidDimensions { rows: -1, cols: 2 }),
            NnmatStatus::InvalidArg
        );
        assert_eq!(NnmatStatus::from(KernelError::NullPointer("data")), NnmatStatus::InvalidArg);
        assert_eq!(NnmatStatus::Aliased as i32, -4);
    }

    #[test]
    fn test_raw_matrix_rejects_bad_args() {
        let mut buf = [0.0f32; 4];
        assert!(RawMatrix::new(buf.as_mut_ptr(), -1, 2).is_err());
        assert!(RawMatrix::new(buf.as_mut_ptr(), 2, -1).is_err());
        assert!(RawMatrix::new(std::ptr::null_mut(), 2, 2).is_err());
        // more than isize::MAX bytes
        assert!(RawMatrix::new(buf.as_mut_ptr(), i32::MAX, i32::MAX).is_err());
        assert!(RawMatrix::new(buf.as_mut_ptr(), 2, 2).is_ok());
    }

    #[test]
    fn test_overlap() {
        let mut buf = [0.0f32; 8];
        let base = buf.as_mut_ptr();
        let lo = RawMatrix::new(base, 2, 2).unwrap();
        let hi = RawMatrix::new(unsafe { base.add(4) }, 2, 2).unwrap();
        let mid = RawMatrix::new(unsafe { base.add(3) }, 1, 2).unwrap();
        let empty = RawMatrix::new(base, 0, 3).unwrap();
        assert!(!lo.overlaps(&hi));
        assert!(lo.overlaps(&lo));
        assert!(lo.overlaps(&mid));
        assert!(mid.overlaps(&hi));
        assert!(!empty.overlaps(&lo));
    }
}
