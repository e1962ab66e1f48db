//! Row-reduction benchmarks over the exact and floating fields

use criterion::{criterion_group, criterion_main, Criterion};
use deduce_core::{AugmentedMatrix, Number};
use std::hint::black_box;

/// A diagonally dominant augmented matrix, invertible by construction
fn dominant_matrix(size: usize) -> AugmentedMatrix<Number> {
    let rows = (0..size)
        .map(|row| {
            (0..=size)
                .map(|column| {
                    if row == column {
                        size as i64 + 1
                    } else {
                        ((row + column) % 3) as i64
                    }
                })
                .map(Number::integer)
                .collect()
        })
        .collect();
    AugmentedMatrix::new(rows).expect("rows have equal length")
}

fn bench_reduction(c: &mut Criterion) {
    let matrix = dominant_matrix(8);
    let float_matrix = matrix.to_float();

    c.bench_function("reduce_8x8_exact", |b| {
        b.iter(|| black_box(&matrix).reduced_form().unwrap())
    });

    c.bench_function("reduce_8x8_float", |b| {
        b.iter(|| black_box(&float_matrix).reduced_form().unwrap())
    });
}

criterion_group!(benches, bench_reduction);
criterion_main!(benches);
