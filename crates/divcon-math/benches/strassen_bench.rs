use criterion::{criterion_group, criterion_main, Criterion};
use divcon_math::strassen::{naive_multiply, strassen_multiply};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_square(rng: &mut StdRng, n: usize) -> Array2<i64> {
    Array2::from_shape_fn((n, n), |_| rng.gen_range(-100..=100))
}

fn bench_strassen_128(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let x = random_square(&mut rng, 128);
    let y = random_square(&mut rng, 128);

    let mut group = c.benchmark_group("multiply_128x128");
    group.sample_size(10);
    group.bench_function("strassen_leaf_8", |b| {
        b.iter(|| black_box(strassen_multiply(&x, &y, 8)))
    });
    group.bench_function("naive", |b| b.iter(|| black_box(naive_multiply(&x, &y))));
    group.finish();
}

fn bench_strassen_leaf_sizes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let x = random_square(&mut rng, 64);
    let y = random_square(&mut rng, 64);

    let mut group = c.benchmark_group("strassen_64x64_leaf");
    for leaf_size in [1usize, 8, 32] {
        group.bench_function(format!("leaf_{leaf_size}"), |b| {
            b.iter(|| black_box(strassen_multiply(&x, &y, leaf_size)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strassen_128, bench_strassen_leaf_sizes);
criterion_main!(benches);
