mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mesh_sampling::geometry::{triangle_areas, Faces};
use mesh_sampling::sampling::even::EvenSurfaceSampling;
use mesh_sampling::sampling::spacing::{GreedySpacingFilter, SpacingFilter};
use mesh_sampling::sampling::surface::sample_surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [usize; 3] = [500, 5_000, 50_000];

fn filtering_greedy_benches(c: &mut Criterion) {
    let tris = common::wavy_sheet(64);
    let mut group = c.benchmark_group("filtering/greedy");

    for &count in &COUNTS {
        let mut rng = StdRng::seed_from_u64(0xF1_u64 ^ count as u64);
        let points = sample_surface(&tris, count * 3, &mut rng)
            .expect("valid sheet")
            .points;
        let radius = (1.0 / (3.0 * count as f32)).sqrt();
        group.throughput(common::elements_throughput(points.len()));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let result = GreedySpacingFilter.filter(&points, radius);
                black_box(result.kept.len());
            });
        });
    }

    group.finish();
}

fn filtering_even_surface_benches(c: &mut Criterion) {
    let tris = common::wavy_sheet(64);
    let areas = triangle_areas(&tris);
    let mut group = c.benchmark_group("filtering/even_surface");

    for &count in &COUNTS {
        let sampler = EvenSurfaceSampling::new(count);
        let mut rng_est = StdRng::seed_from_u64(0xE7E_u64 ^ count as u64);
        let expected = sampler
            .generate(Faces::Triangles(&tris), &areas, &mut rng_est)
            .expect("valid sheet")
            .len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xE7E_u64 ^ count as u64 ^ 1);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let samples = sampler
                    .generate(Faces::Triangles(&tris), &areas, &mut rng)
                    .expect("valid sheet");
                black_box(samples.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = filtering_greedy_benches, filtering_even_surface_benches
}
criterion_main!(benches);
