//! Conversion Benchmarks
//!
//! Per-color and batch OKLab conversions, gamut classification and the
//! chroma search, measured against the scalar paths.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxpick_core::color::oklab::{linear_srgb_to_oklab, oklab_to_linear_srgb};
use oxpick_core::gamut::{clamp_to_working_gamut, find_max_in_gamut_chroma, is_in_working_gamut};
use oxpick_core::{GamutOptions, LinearRgb, Oklab, WorkingColorSpace, simd};

/// A lightness/hue sweep at a chroma that is partly out of gamut
fn generate_oklab_data(count: usize) -> Vec<Oklab> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let (sin, cos) = (t * 37.0 * std::f64::consts::TAU).sin_cos();
            Oklab::new(t, 0.25 * cos, 0.25 * sin)
        })
        .collect()
}

fn generate_rgb_data(count: usize) -> Vec<LinearRgb> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            LinearRgb::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

// ============================================================================
// OKLab
// ============================================================================

fn bench_oklab_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("oklab_single");

    let lab = Oklab::new(0.7, 0.1, -0.05);
    let rgb = LinearRgb::new(0.5, 0.3, 0.7);

    group.bench_function("oklab_to_linear_srgb", |b| {
        b.iter(|| oklab_to_linear_srgb(black_box(lab)))
    });
    group.bench_function("linear_srgb_to_oklab", |b| {
        b.iter(|| linear_srgb_to_oklab(black_box(rgb)))
    });

    group.finish();
}

fn bench_oklab_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("oklab_batch");

    for size in [100, 1000, 10000, 100000].iter() {
        let labs = generate_oklab_data(*size);
        let rgbs = generate_rgb_data(*size);
        let mut rgb_out = vec![LinearRgb::default(); *size];
        let mut lab_out = vec![Oklab::default(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("simd_to_rgb", size), size, |b, _| {
            b.iter(|| simd::oklab_to_linear_srgb_batch(black_box(&labs), black_box(&mut rgb_out)))
        });

        group.bench_with_input(BenchmarkId::new("scalar_to_rgb", size), size, |b, _| {
            b.iter(|| {
                for (lab, out) in labs.iter().zip(rgb_out.iter_mut()) {
                    *out = oklab_to_linear_srgb(black_box(*lab));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("simd_to_oklab", size), size, |b, _| {
            b.iter(|| simd::linear_srgb_to_oklab_batch(black_box(&rgbs), black_box(&mut lab_out)))
        });
    }

    group.finish();
}

// ============================================================================
// Gamut
// ============================================================================

fn bench_gamut_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamut_mask");
    let space = WorkingColorSpace::display_p3();
    let options = GamutOptions::default();

    for size in [1000, 100000].iter() {
        let labs = generate_oklab_data(*size);
        let mut mask = vec![false; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("simd", size), size, |b, _| {
            b.iter(|| {
                simd::gamut_mask_batch(&space, black_box(&labs), black_box(&mut mask), &options)
            })
        });

        group.bench_with_input(BenchmarkId::new("scalar", size), size, |b, _| {
            b.iter(|| {
                for (lab, out) in labs.iter().zip(mask.iter_mut()) {
                    *out = is_in_working_gamut(&space, black_box(*lab));
                }
            })
        });
    }

    group.finish();
}

fn bench_chroma_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("chroma_search");
    let space = WorkingColorSpace::srgb();

    group.bench_function("find_max_in_gamut_chroma", |b| {
        b.iter(|| find_max_in_gamut_chroma(&space, black_box(0.6), black_box(140.0), 0.4))
    });

    group.bench_function("clamp_to_working_gamut", |b| {
        b.iter(|| clamp_to_working_gamut(&space, black_box(Oklab::new(0.7, 0.3, 0.3))))
    });

    // One picker slider: 256 hue steps at fixed lightness
    group.bench_function("hue_slider_256", |b| {
        b.iter(|| {
            (0..256)
                .map(|i| find_max_in_gamut_chroma(&space, 0.7, i as f64 * 360.0 / 256.0, 0.4))
                .sum::<f64>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_oklab_single,
    bench_oklab_batch,
    bench_gamut_mask,
    bench_chroma_search,
);

criterion_main!(benches);
