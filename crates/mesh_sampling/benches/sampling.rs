mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Quat, Vec3};
use mesh_sampling::geometry::triangle_areas;
use mesh_sampling::sampling::sphere::sample_sphere;
use mesh_sampling::sampling::surface::sample_surface_weighted;
use mesh_sampling::sampling::volume::{sample_box, sample_volume};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNTS: [usize; 3] = [1_000, 10_000, 100_000];
const SHEET_RESOLUTIONS: [usize; 3] = [8, 64, 256];

fn sampling_surface_benches(c: &mut Criterion) {
    for &n in &SHEET_RESOLUTIONS {
        let tris = common::wavy_sheet(n);
        let areas = triangle_areas(&tris);
        let mut group = c.benchmark_group(format!("sampling/surface/faces_{}", tris.len()));

        for &count in &COUNTS {
            group.throughput(common::elements_throughput(count));
            let mut rng = StdRng::seed_from_u64(0x5EED_u64 ^ (count as u64) ^ ((n as u64) << 20));

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
                b.iter(|| {
                    let samples = sample_surface_weighted(&tris, &areas, count, &mut rng)
                        .expect("valid sheet");
                    black_box(samples.len());
                });
            });
        }

        group.finish();
    }
}

fn sampling_volume_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/volume");
    let ball = |p: Vec3| p.length_squared() <= 1.0;
    let placement = Mat4::from_rotation_translation(
        Quat::from_rotation_y(0.7),
        Vec3::new(1.0, 2.0, 3.0),
    );

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));
        let mut rng = StdRng::seed_from_u64(0xB0B_u64 ^ count as u64);

        group.bench_with_input(BenchmarkId::new("ball", count), &count, |b, &count| {
            b.iter(|| {
                let pts = sample_volume(Vec3::splat(-1.0), Vec3::splat(2.0), &ball, count, &mut rng)
                    .expect("valid bounds");
                black_box(pts.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("box", count), &count, |b, &count| {
            b.iter(|| {
                let pts = sample_box(Vec3::new(2.0, 1.0, 0.5), count, Some(placement), &mut rng)
                    .expect("valid box");
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

fn sampling_sphere_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/sphere");

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));
        let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ count as u64);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let pts = sample_sphere(count, &mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_surface_benches, sampling_volume_benches, sampling_sphere_benches
}
criterion_main!(benches);
