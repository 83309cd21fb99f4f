//! Scalar activation functions and their derivatives.
//!
//! Derivatives are evaluated at the pre-activation value `x`.

/// Tanh: `out[i] = tanh(x[i])`
///
/// # Safety
/// `x` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_tanh(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        *out.add(i) = (*x.add(i)).tanh();
    }
}

/// Tanh derivative: `out[i] = 1 - tanh(x[i])^2`
///
/// # Safety
/// `x` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_tanh_derivative(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        let t = (*x.add(i)).tanh();
        *out.add(i) = 1.0 - t * t;
    }
}

/// ReLU: `out[i] = max(0, x[i])`
///
/// # Safety
/// `x` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_relu(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        let v = *x.add(i);
        *out.add(i) = if 0.0 > v { 0.0 } else { v };
    }
}

/// ReLU derivative: `out[i] = x[i] < 0 ? 0 : 1`
///
/// # Safety
/// `x` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_relu_derivative(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        *out.add(i) = if *x.add(i) < 0.0 { 0.0 } else { 1.0 };
    }
}

/// Sigmoid: `out[i] = exp(x) / (exp(x) + 1)`
///
/// # Safety
/// `x` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_sigmoid(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        let e = (*x.add(i)).exp();
        *out.add(i) = e / (e + 1.0);
    }
}

/// Sigmoid derivative: `out[i] = exp(x) / (exp(x) + 1)^2`
///
/// # Safety
/// `x` and `out` must each point to `n` valid f32 values.
#[no_mangle]
#[inline(never)]
pub unsafe extern "C" fn scalar_sigmoid_derivative(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        let e = (*x.add(i)).exp();
        let d = e + 1.0;
        *out.add(i) = e / (d * d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_scalar(f: unsafe extern "C" fn(*const f32, *mut f32, usize), input: &[f32]) -> Vec<f32> {
        let mut out = vec![0.0_f32; input.len()];
        unsafe { f(input.as_ptr(), out.as_mut_ptr(), input.len()) };
        out
    }

    #[test]
    fn test_scalar_ops_tanh() {
        let out = run_scalar(scalar_tanh, &[-1.0, 0.0, 1.0]);
        assert!((out[0] + 0.761594).abs() < 1e-5);
        assert_eq!(out[1], 0.0);
        assert!((out[2] - 0.761594).abs() < 1e-5);
    }

    #[test]
    fn test_scalar_ops_tanh_derivative() {
        let out = run_scalar(scalar_tanh_derivative, &[0.0, 1.0]);
        assert_eq!(out[0], 1.0);
        // 1 - tanh(1)^2 ≈ 0.419974
        assert!((out[1] - 0.419974).abs() < 1e-5);
    }

    #[test]
    fn test_scalar_ops_relu() {
        let out = run_scalar(scalar_relu, &[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(out, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_scalar_ops_relu_derivative() {
        let out = run_scalar(scalar_relu_derivative, &[-1.0, 0.0, 1.0]);
        assert_eq!(out, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_scalar_ops_sigmoid() {
        let out = run_scalar(scalar_sigmoid, &[0.0, 1.0, -1.0]);
        assert_eq!(out[0], 0.5);
        assert!((out[1] - 0.731059).abs() < 1e-5);
        assert!((out[2] - 0.268941).abs() < 1e-5);
    }

    #[test]
    fn test_scalar_ops_sigmoid_derivative() {
        let out = run_scalar(scalar_sigmoid_derivative, &[0.0]);
        assert_eq!(out[0], 0.25);
    }
}
