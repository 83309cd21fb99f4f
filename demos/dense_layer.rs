//! Two-layer dense network trained on XOR, built only from kernel calls.
//!
//! Usage: `cargo run --example dense_layer -- [tanh|relu|sigmoid] [epochs]`
//!
//! Forward per layer: `z = x·W`, `z += b`, `a = f(z)`.
//! Backward: `δ = upstream ∘ f'(z)` with `f'` read from a copy of the stored
//! pre-activation, then `W -= lr·(xᵗ·δ)` and `b -= lr·δ`.

use nnmat_kernels::{checked, Activation, KernelResult, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HIDDEN: usize = 4;
const LEARNING_RATE: f32 = 0.5;

struct Dense {
    weights: Matrix,
    bias: Matrix,
    activation: Activation,
    // cached for the backward pass
    input: Matrix,
    pre_activation: Matrix,
    output: Matrix,
}

impl Dense {
    fn new(inputs: usize, outputs: usize, activation: Activation, rng: &mut StdRng) -> Self {
        let weights = (0..inputs * outputs).map(|_| rng.gen_range(-1.0..1.0)).collect();
        Self {
            weights: Matrix::from_col_major(weights, inputs, outputs),
            bias: Matrix::zeros(1, outputs),
            activation,
            input: Matrix::zeros(1, inputs),
            pre_activation: Matrix::zeros(1, outputs),
            output: Matrix::zeros(1, outputs),
        }
    }

    fn forward(&mut self, x: &Matrix) -> KernelResult<&Matrix> {
        self.input.view_mut().copy_from(&x.view());
        checked::matmul(&x.view(), &self.weights.view(), &mut self.pre_activation.view_mut())?;
        checked::add_inplace(&mut self.pre_activation.view_mut(), &self.bias.view())?;
        self.output.view_mut().copy_from(&self.pre_activation.view());
        self.activation.forward_inplace(&mut self.output.view_mut());
        Ok(&self.output)
    }

    /// Apply one gradient step and return the error signal for the layer below.
    fn backward(&mut self, upstream: &Matrix) -> KernelResult<Matrix> {
        let (inputs, outputs) = (self.weights.rows(), self.weights.cols());

        let mut slope = self.pre_activation.clone();
        self.activation.derivative_inplace(&mut slope.view_mut());
        let mut delta = Matrix::zeros(1, outputs);
        checked::mul_elementwise(&upstream.view(), &slope.view(), &mut delta.view_mut())?;

        // error for the previous layer, against the weights before the update
        let mut w_t = Matrix::zeros(outputs, inputs);
        checked::transpose(&self.weights.view(), &mut w_t.view_mut())?;
        let mut downstream = Matrix::zeros(1, inputs);
        checked::matmul(&delta.view(), &w_t.view(), &mut downstream.view_mut())?;

        let mut x_t = Matrix::zeros(inputs, 1);
        checked::transpose(&self.input.view(), &mut x_t.view_mut())?;
        let mut grad = Matrix::zeros(inputs, outputs);
        checked::matmul(&x_t.view(), &delta.view(), &mut grad.view_mut())?;

        let mut step = Matrix::zeros(inputs, outputs);
        checked::scale(&grad.view(), LEARNING_RATE, &mut step.view_mut())?;
        checked::sub_inplace(&mut self.weights.view_mut(), &step.view())?;

        let mut bias_step = Matrix::zeros(1, outputs);
        checked::scale(&delta.view(), LEARNING_RATE, &mut bias_step.view_mut())?;
        checked::sub_inplace(&mut self.bias.view_mut(), &bias_step.view())?;

        Ok(downstream)
    }
}

fn main() -> KernelResult<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let activation: Activation = args.next().as_deref().unwrap_or("tanh").parse()?;
    let epochs: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(2000);

    let samples = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let mut rng = StdRng::seed_from_u64(7);
    let mut hidden = Dense::new(2, HIDDEN, activation, &mut rng);
    let mut out = Dense::new(HIDDEN, 1, Activation::Sigmoid, &mut rng);
    log::info!("training 2-{HIDDEN}-1 network, hidden activation {activation}, {epochs} epochs");

    for epoch in 0..epochs {
        let mut loss = 0.0;
        for (x, y) in &samples {
            let x = Matrix::from_col_major(x.to_vec(), 1, 2);
            let target = Matrix::from_col_major(vec![*y], 1, 1);

            let h = hidden.forward(&x)?.clone();
            let prediction = out.forward(&h)?;

            // d(½(p - y)²)/dp = p - y
            let mut error = prediction.clone();
            checked::sub_inplace(&mut error.view_mut(), &target.view())?;
            loss += 0.5 * error.get(0, 0) * error.get(0, 0);

            let upstream = out.backward(&error)?;
            hidden.backward(&upstream)?;
        }
        if epoch % 250 == 0 || epoch + 1 == epochs {
            log::info!("epoch {epoch:>5}: loss {loss:.6}");
        }
    }

    for (x, y) in &samples {
        let x = Matrix::from_col_major(x.to_vec(), 1, 2);
        let h = hidden.forward(&x)?.clone();
        let p = out.forward(&h)?.get(0, 0);
        log::info!("{x} -> {p:.4} (target {y})");
    }
    log::debug!("hidden weights: {}", hidden.weights);
    log::debug!("output weights: {}", out.weights);
    Ok(())
}
