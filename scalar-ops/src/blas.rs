/// Vector add: `out[i] = a[i] + b[i]`
///
/// # Safety
/// `a`, `b` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_vec_add(a: *const f32, b: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        *out.add(i) = *a.add(i) + *b.add(i);
    }
}

/// Vector sub: `out[i] = a[i] - b[i]`
///
/// # Safety
/// `a`, `b` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_vec_sub(a: *const f32, b: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        *out.add(i) = *a.add(i) - *b.add(i);
    }
}

/// Vector mul: `out[i] = a[i] * b[i]`
///
/// # Safety
/// `a`, `b` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_vec_mul(a: *const f32, b: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        *out.add(i) = *a.add(i) * *b.add(i);
    }
}

/// Scale: `out[i] = a[i] * k`
///
/// # Safety
/// `a` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_scale(a: *const f32, k: f32, out: *mut f32, n: usize) {
    for i in 0..n {
        *out.add(i) = *a.add(i) * k;
    }
}

/// GEMM: `C[i][j] = sum_p A[i][p] * B[p][j]` (column-major)
///
/// Naive triple loop with a dot product per output element.
/// A is [M,K], B is [K,N], C is [M,N]. C is overwritten.
///
/// # Safety
/// `a`, `b`, `c` must point to `m*k`, `k*n`, `m*n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_gemm_colmajor(
    a: *const f32,
    b: *const f32,
    c: *mut f32,
    m: usize,
    n: usize,
    k: usize,
) {
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0_f32;
            for p in 0..k {
                acc += *a.add(p * m + i) * *b.add(j * k + p);
            }
            *c.add(j * m + i) = acc;
        }
    }
}

/// Transpose 2D: `out[j][i] = input[i][j]` (column-major)
///
/// input is [rows, cols], out is [cols, rows].
///
/// # Safety
/// `input` and `out` must each point to `rows*cols` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_transpose_colmajor(
    input: *const f32,
    out: *mut f32,
    rows: usize,
    cols: usize,
) {
    for i in 0..rows {
        for j in 0..cols {
            *out.add(i * cols + j) = *input.add(j * rows + i);
        }
    }
}

/// Column reversal: `out[i][j] = input[i][cols - 1 - j]` (column-major)
///
/// # Safety
/// `input` and `out` must each point to `rows*cols` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_reverse_cols(
    input: *const f32,
    out: *mut f32,
    rows: usize,
    cols: usize,
) {
    for i in 0..rows {
        for j in 0..cols {
            *out.add(j * rows + i) = *input.add((cols - 1 - j) * rows + i);
        }
    }
}

/// Row reversal: `out[i][j] = input[rows - 1 - i][j]` (column-major)
///
/// # Safety
/// `input` and `out` must each point to `rows*cols` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_reverse_rows(
    input: *const f32,
    out: *mut f32,
    rows: usize,
    cols: usize,
) {
    for i in 0..rows {
        for j in 0..cols {
            *out.add(j * rows + i) = *input.add(j * rows + (rows - 1 - i));
        }
    }
}
