#![allow(dead_code)]

use rand::Rng;

/// GEMM GFLOPS: 2*M*N*K / duration / 1e9
pub fn gemm_gflops(m: usize, n: usize, k: usize, duration_secs: f64) -> f64 {
    2.0 * m as f64 * n as f64 * k as f64 / duration_secs / 1e9
}

/// GEMM FLOP count (multiply-add = 2 ops)
pub fn gemm_flops(m: usize, n: usize, k: usize) -> u64 {
    2 * m as u64 * n as u64 * k as u64
}

/// Bytes touched by a binary elementwise op (two reads + one write, f32)
pub fn binary_rw_bytes(n: usize) -> u64 {
    3 * n as u64 * 4
}

/// Bytes touched by an in-place unary op (read + write, f32)
pub fn inplace_rw_bytes(n: usize) -> u64 {
    2 * n as u64 * 4
}

/// Random f32 vector in [-1.0, 1.0)
pub fn random_f32_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Random f32 vector in [-scale, scale)
pub fn random_scaled_vec(n: usize, scale: f32) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-scale..scale)).collect()
}
