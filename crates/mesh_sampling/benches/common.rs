use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::Vec3;
use mesh_sampling::geometry::Triangle;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Wavy `n * n` sheet over the unit square, two triangles per cell.
pub fn wavy_sheet(n: usize) -> Vec<Triangle> {
    let step = 1.0 / n as f32;
    let height = |x: f32, y: f32| 0.1 * (x * 12.0).sin() * (y * 9.0).cos();
    let vertex = |i: usize, j: usize| {
        let (x, y) = (i as f32 * step, j as f32 * step);
        Vec3::new(x, y, height(x, y))
    };

    let mut tris = Vec::with_capacity(n * n * 2);
    for j in 0..n {
        for i in 0..n {
            let (a, b, c, d) = (
                vertex(i, j),
                vertex(i + 1, j),
                vertex(i + 1, j + 1),
                vertex(i, j + 1),
            );
            tris.push([a, b, c]);
            tris.push([a, c, d]);
        }
    }
    tris
}
