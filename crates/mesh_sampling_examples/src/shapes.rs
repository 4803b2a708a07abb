//! Analytic demo shapes that implement the sampling seams.
use std::borrow::Cow;
use std::f32::consts::TAU;

use glam::Vec3;
use mesh_sampling::geometry::mesh::{Containment, SurfaceMesh};
use mesh_sampling::geometry::{split_quad, Quad, Triangle};

/// Torus around the Z axis, tessellated into quads.
#[derive(Debug, Clone)]
pub struct Torus {
    pub major_radius: f32,
    pub minor_radius: f32,
    quads: Vec<Quad>,
}

impl Torus {
    pub fn new(major_radius: f32, minor_radius: f32, segments: usize, rings: usize) -> Self {
        let vertex = |i: usize, j: usize| {
            let u = TAU * (i % segments) as f32 / segments as f32;
            let v = TAU * (j % rings) as f32 / rings as f32;
            let r = major_radius + minor_radius * v.cos();
            Vec3::new(r * u.cos(), r * u.sin(), minor_radius * v.sin())
        };

        let mut quads = Vec::with_capacity(segments * rings);
        for i in 0..segments {
            for j in 0..rings {
                quads.push([
                    vertex(i, j),
                    vertex(i + 1, j),
                    vertex(i + 1, j + 1),
                    vertex(i, j + 1),
                ]);
            }
        }

        Self {
            major_radius,
            minor_radius,
            quads,
        }
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }
}

/// Triangles `2 * i` and `2 * i + 1` are the two halves of quad `i`, so a sampled
/// face index maps back to its quad with `face / 2`.
impl SurfaceMesh for Torus {
    fn triangles(&self) -> Cow<'_, [Triangle]> {
        Cow::Owned(
            self.quads
                .iter()
                .flat_map(|q| {
                    let (first, second) = split_quad(q);
                    [first, second]
                })
                .collect(),
        )
    }
}

impl Containment for Torus {
    fn contains(&self, p: Vec3) -> bool {
        let ring = (p.x * p.x + p.y * p.y).sqrt() - self.major_radius;
        ring * ring + p.z * p.z <= self.minor_radius * self.minor_radius
    }
}
