//! Numerical behavior of the activations across the whole f32 range.
//!
//! These tests verify that:
//! 1. tanh and ReLU stay finite for every finite input
//! 2. sigmoid is finite up to the `e^x` overflow point and NaN beyond it
//! 3. analytic derivatives agree with central finite differences
//! 4. the forward activations are monotone

use nnmat_kernels::{ops, Activation, Matrix};

/// Generate deterministic test data.
fn generate_inputs(n: usize, seed: u64, scale: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(n);
    let mut state = seed;
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let val = ((state >> 33) as f32) / (u32::MAX >> 1) as f32 * 2.0 - 1.0;
        data.push(val * scale);
    }
    data
}

fn column(xs: &[f32]) -> Matrix {
    Matrix::from_col_major(xs.to_vec(), xs.len(), 1)
}

fn forward(act: Activation, xs: &[f32]) -> Vec<f32> {
    let mut m = column(xs);
    act.forward_inplace(&mut m.view_mut());
    m.into_vec()
}

fn derivative(act: Activation, xs: &[f32]) -> Vec<f32> {
    let mut m = column(xs);
    act.derivative_inplace(&mut m.view_mut());
    m.into_vec()
}

// =============================================================================
// Range
// =============================================================================

#[test]
fn test_tanh_and_relu_finite_everywhere() {
    let mut xs = generate_inputs(4096, 7, 1e30);
    xs.extend_from_slice(&[f32::MAX, f32::MIN, f32::MIN_POSITIVE, -f32::MIN_POSITIVE]);

    for act in [Activation::Tanh, Activation::Relu] {
        for (x, y) in xs.iter().zip(forward(act, &xs)) {
            assert!(y.is_finite(), "{act}({x}) = {y}");
        }
        for (x, d) in xs.iter().zip(derivative(act, &xs)) {
            assert!(d.is_finite(), "{act}'({x}) = {d}");
        }
    }
}

#[test]
fn test_tanh_saturates() {
    let ys = forward(Activation::Tanh, &[-50.0, 50.0, f32::MAX]);
    assert_eq!(ys, vec![-1.0, 1.0, 1.0]);
    let ds = derivative(Activation::Tanh, &[-50.0, 50.0]);
    assert_eq!(ds, vec![0.0, 0.0]);
}

#[test]
fn test_sigmoid_overflow_boundary() {
    // ln(f32::MAX) ≈ 88.72
    let ys = forward(Activation::Sigmoid, &[80.0, 88.0, 88.8, 1000.0, f32::INFINITY]);
    assert!((ys[0] - 1.0).abs() < 1e-6);
    assert!((ys[1] - 1.0).abs() < 1e-6);
    assert!(ys[2].is_nan());
    assert!(ys[3].is_nan());
    assert!(ys[4].is_nan());

    // the negative side underflows cleanly to zero
    let ys = forward(Activation::Sigmoid, &[-80.0, -200.0, f32::NEG_INFINITY]);
    assert!(ys[0] >= 0.0 && ys[0] < 1e-30);
    assert_eq!(&ys[1..], &[0.0, 0.0]);
}

#[test]
fn test_sigmoid_derivative_overflow_boundary() {
    let ds = derivative(Activation::Sigmoid, &[-200.0, 50.0, 1000.0]);
    assert_eq!(ds[0], 0.0);
    // (e+1)^2 overflows before e does
    assert_eq!(ds[1], 0.0);
    assert!(ds[2].is_nan());
}

#[test]
fn test_nan_propagation() {
    for act in Activation::ALL {
        let y = forward(act, &[f32::NAN])[0];
        assert!(y.is_nan(), "{act}(NaN) = {y}");
    }
    // NaN < 0 is false
    assert_eq!(derivative(Activation::Relu, &[f32::NAN]), vec![1.0]);
}

// =============================================================================
// Derivatives vs. finite differences
// =============================================================================

#[test]
fn test_derivatives_match_finite_differences() {
    const H: f64 = 1e-3;
    let xs: Vec<f32> = generate_inputs(512, 42, 6.0)
        .into_iter()
        // keep clear of ReLU's kink
        .filter(|x| x.abs() > 0.01)
        .collect();

    for act in Activation::ALL {
        let analytic = derivative(act, &xs);
        for (&x, &d) in xs.iter().zip(&analytic) {
            let x = x as f64;
            let f = |v: f64| act.apply_scalar(v as f32) as f64;
            let numeric = (f(x + H) - f(x - H)) / (2.0 * H);
            assert!(
                (numeric - d as f64).abs() < 2e-3,
                "{act}'({x}): analytic {d}, numeric {numeric}"
            );
        }
    }
}

// =============================================================================
// Monotonicity
// =============================================================================

#[test]
fn test_forward_monotone() {
    let xs: Vec<f32> = (-200..=200).map(|i| i as f32 * 0.05).collect();
    for act in Activation::ALL {
        let ys = forward(act, &xs);
        for w in ys.windows(2) {
            assert!(w[0] <= w[1], "{act} not monotone: {} > {}", w[0], w[1]);
        }
    }
}

#[test]
fn test_large_buffer_inplace() {
    // 1M elements in one view, spread over many columns
    let rows = 1024;
    let cols = 1024;
    let xs = generate_inputs(rows * cols, 3, 20.0);
    let mut m = Matrix::from_col_major(xs.clone(), rows, cols);
    ops::sigmoid_inplace(&mut m.view_mut());
    for (x, s) in xs.iter().zip(m.as_slice()) {
        assert!((0.0..=1.0).contains(s), "sigmoid({x}) = {s}");
    }
}
