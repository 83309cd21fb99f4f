//! In-place activation benchmarks.
//!
//! Kernels: tanh, ReLU, sigmoid and their derivatives
//! Sizes: 1K, 16K, 256K elements
//! Report: bytes throughput (read + write)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

#[path = "utils.rs"]
mod utils;

use nnmat_kernels::{Activation, MatrixViewMut};

const ELEM_SIZES: &[usize] = &[1024, 16384, 262144];

fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        16384 => "16K".into(),
        262144 => "256K".into(),
        _ => format!("{n}"),
    }
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation");

    for &n in ELEM_SIZES {
        group.throughput(Throughput::Bytes(utils::inplace_rw_bytes(n)));
        let input = utils::random_scaled_vec(n, 8.0);
        let mut buf = input.clone();

        for act in Activation::ALL {
            group.bench_function(BenchmarkId::new(act.name(), size_label(n)), |bench| {
                bench.iter(|| {
                    buf.copy_from_slice(&input);
                    act.forward_inplace(&mut MatrixViewMut::new(black_box(&mut buf), n, 1));
                });
            });
        }
    }
    group.finish();
}

fn bench_derivative(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivative");

    for &n in ELEM_SIZES {
        group.throughput(Throughput::Bytes(utils::inplace_rw_bytes(n)));
        let input = utils::random_scaled_vec(n, 8.0);
        let mut buf = input.clone();

        for act in Activation::ALL {
            group.bench_function(BenchmarkId::new(act.name(), size_label(n)), |bench| {
                bench.iter(|| {
                    buf.copy_from_slice(&input);
                    act.derivative_inplace(&mut MatrixViewMut::new(black_box(&mut buf), n, 1));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_derivative);
criterion_main!(benches);
