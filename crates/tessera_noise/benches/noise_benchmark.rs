//! Benchmark for noise sampling performance.
//!
//! Compares the interpolation kernels on single samples and a full
//! 256x256 viewer grid, plus table construction and fractal accumulation.
//!
//! Run with: cargo bench --package tessera_noise --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tessera_noise::{FractalNoise, FractalParams, Kernel, Noise2D, ValueNoise};

const SEED: u32 = 42;

fn benchmark_table_construction(c: &mut Criterion) {
    c.bench_function("value_noise_tables", |b| {
        b.iter(|| black_box(ValueNoise::new(black_box(SEED), Kernel::Cosine)));
    });
}

fn benchmark_single_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_sample");
    for kernel in Kernel::ALL {
        let Ok(noise) = ValueNoise::new(SEED, kernel) else {
            continue;
        };
        group.bench_function(format!("{kernel:?}"), |b| {
            let mut x = 0.0f64;
            b.iter(|| {
                x += 0.1;
                black_box(noise.sample(black_box(x), black_box(x * 0.7)))
            });
        });
    }
    group.finish();
}

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_256x256");
    group.throughput(Throughput::Elements(256 * 256));
    group.sample_size(20);

    for kernel in [Kernel::Linear, Kernel::CubicSpline] {
        let Ok(noise) = ValueNoise::new(SEED, kernel) else {
            continue;
        };
        group.bench_function(format!("{kernel:?}"), |b| {
            b.iter(|| black_box(noise.sample_grid(256, 256, 32.0)));
        });
    }
    group.finish();
}

fn benchmark_fractal(c: &mut Criterion) {
    let Ok(base) = ValueNoise::new(SEED, Kernel::Cosine) else {
        return;
    };
    let Ok(fractal) = FractalNoise::new(&base, FractalParams::default()) else {
        return;
    };

    c.bench_function("fractal_5_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(fractal.sample(black_box(x), black_box(x * 0.7)))
        });
    });
}

criterion_group!(
    benches,
    benchmark_table_construction,
    benchmark_single_sample,
    benchmark_grid,
    benchmark_fractal
);
criterion_main!(benches);
