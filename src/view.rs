//! Borrowed column-major matrix views over caller-owned `f32` buffers.
//!
//! A view never owns its storage. The lifetime `'a` ties it to the caller's
//! buffer, so a view can't outlive the data it describes, and the split
//! between [`MatrixView`] (shared) and [`MatrixViewMut`] (exclusive) means a
//! destination view can never overlap a source view in safe code.
//!
//! Element `(i, j)` of a `rows × cols` view lives at flat index
//! `j * rows + i`; each column is a contiguous run of `rows` values.
//!
//! # Example
//!
//! ```
//! use nnmat_kernels::view::{MatrixView, MatrixViewMut};
//!
//! // [[1, 2], [3, 4]] in column-major order
//! let a = [1.0_f32, 3.0, 2.0, 4.0];
//! let mut out = [0.0_f32; 4];
//!
//! let a = MatrixView::new(&a, 2, 2);
//! let mut out = MatrixViewMut::new(&mut out, 2, 2);
//! nnmat_kernels::ops::transpose(&a, &mut out);
//! assert_eq!(out.get(0, 1), 3.0);
//! ```

use std::fmt;

use crate::error::{KernelError, KernelResult};
use crate::types::MatShape;

#[inline(always)]
fn required_len(rows: usize, cols: usize) -> KernelResult<usize> {
    MatShape::new(rows, cols)
        .checked_len()
        .ok_or(KernelError::InvalidDimensions {
            rows: rows as i64,
            cols: cols as i64,
        })
}

/// Read-only `rows × cols` view over a column-major `f32` buffer.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixView<'a> {
    /// Wrap the first `rows * cols` values of `data`.
    ///
    /// The buffer must hold at least `rows * cols` values. This is not
    /// validated beyond a debug assertion; an undersized buffer panics on the
    /// slice below. Use [`MatrixView::try_new`] to get an error instead.
    #[inline(always)]
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        debug_assert!(
            data.len() >= len,
            "buffer holds {} values, {}x{} view needs {}",
            data.len(),
            rows,
            cols,
            len
        );
        Self {
            data: &data[..len],
            rows,
            cols,
        }
    }

    /// Validating constructor.
    pub fn try_new(data: &'a [f32], rows: usize, cols: usize) -> KernelResult<Self> {
        let required = required_len(rows, cols)?;
        if data.len() < required {
            return Err(KernelError::BufferTooSmall {
                required,
                available: data.len(),
            });
        }
        Ok(Self {
            data: &data[..required],
            rows,
            cols,
        })
    }

    /// View a native-endian byte buffer as `f32` values.
    ///
    /// Fails if `bytes` is misaligned for `f32` or its length isn't a multiple
    /// of 4.
    pub fn from_bytes(bytes: &'a [u8], rows: usize, cols: usize) -> KernelResult<Self> {
        let data: &'a [f32] = bytemuck::try_cast_slice(bytes)?;
        Self::try_new(data, rows, cols)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn shape(&self) -> MatShape {
        MatShape::new(self.rows, self.cols)
    }

    /// Number of elements (`rows * cols`).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying column-major values.
    #[inline(always)]
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Element at row `i`, column `j`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[j * self.rows + i]
    }

    /// Column `j` as a contiguous slice.
    #[inline(always)]
    pub fn column(&self, j: usize) -> &'a [f32] {
        let start = j * self.rows;
        &self.data[start..start + self.rows]
    }

    /// Copy out as row vectors (row-major nesting), mostly for tests and logs.
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        (0..self.rows)
            .map(|i| (0..self.cols).map(|j| self.get(i, j)).collect())
            .collect()
    }
}

/// Writable `rows × cols` view over a column-major `f32` buffer.
#[derive(Debug)]
pub struct MatrixViewMut<'a> {
    data: &'a mut [f32],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixViewMut<'a> {
    /// Wrap the first `rows * cols` values of `data`.
    ///
    /// Same buffer contract as [`MatrixView::new`].
    #[inline(always)]
    pub fn new(data: &'a mut [f32], rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        debug_assert!(
            data.len() >= len,
            "buffer holds {} values, {}x{} view needs {}",
            data.len(),
            rows,
            cols,
            len
        );
        Self {
            data: &mut data[..len],
            rows,
            cols,
        }
    }

    /// Validating constructor.
    pub fn try_new(data: &'a mut [f32], rows: usize, cols: usize) -> KernelResult<Self> {
        let required = required_len(rows, cols)?;
        if data.len() < required {
            return Err(KernelError::BufferTooSmall {
                required,
                available: data.len(),
            });
        }
        Ok(Self {
            data: &mut data[..required],
            rows,
            cols,
        })
    }

    /// Writable counterpart of [`MatrixView::from_bytes`].
    pub fn from_bytes_mut(bytes: &'a mut [u8], rows: usize, cols: usize) -> KernelResult<Self> {
        let data: &'a mut [f32] = bytemuck::try_cast_slice_mut(bytes)?;
        Self::try_new(data, rows, cols)
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn shape(&self) -> MatShape {
        MatShape::new(self.rows, self.cols)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[f32] {
        &*self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Re-borrow as a read-only view.
    #[inline(always)]
    pub fn as_view(&self) -> MatrixView<'_> {
        MatrixView {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[j * self.rows + i]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[j * self.rows + i] = value;
    }

    #[inline(always)]
    pub fn column(&self, j: usize) -> &[f32] {
        let start = j * self.rows;
        &self.data[start..start + self.rows]
    }

    #[inline(always)]
    pub fn column_mut(&mut self, j: usize) -> &mut [f32] {
        let start = j * self.rows;
        &mut self.data[start..start + self.rows]
    }

    /// Set every element to `value`.
    #[inline(always)]
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Overwrite this view with the values of `src` (same shape).
    #[inline(always)]
    pub fn copy_from(&mut self, src: &MatrixView<'_>) {
        debug_assert_eq!(self.shape(), src.shape(), "copy_from shape mismatch");
        self.data.copy_from_slice(src.as_slice());
    }

    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.as_view().to_rows()
    }
}

fn fmt_rows(f: &mut fmt::Formatter<'_>, view: &MatrixView<'_>) -> fmt::Result {
    write!(f, "[")?;
    for i in 0..view.rows() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "[")?;
        for j in 0..view.cols() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", view.get(i, j))?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

impl fmt::Display for MatrixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(f, self)
    }
}

impl fmt::Display for MatrixViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rows(f, &self.as_view())
    }
}
