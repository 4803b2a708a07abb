//! Seams to host geometry: triangle meshes and containment predicates.
//!
//! The samplers never build or query meshes themselves. A host library exposes its
//! surface through [`SurfaceMesh`] and its interior through [`Containment`]; plain
//! triangle slices and closures implement both out of the box.
use std::borrow::Cow;

use glam::Vec3;

use crate::geometry::{triangle_areas, Aabb, Triangle};

/// Read-only access to a triangulated surface.
pub trait SurfaceMesh {
    /// Triangles in face order.
    fn triangles(&self) -> Cow<'_, [Triangle]>;

    /// Per-face areas, index-aligned with [`SurfaceMesh::triangles`].
    fn face_areas(&self) -> Vec<f32> {
        triangle_areas(&self.triangles())
    }

    fn total_area(&self) -> f32 {
        self.face_areas().iter().sum()
    }

    /// Axis-aligned bounds, `None` for an empty mesh.
    fn bounds(&self) -> Option<Aabb> {
        Aabb::from_triangles(&self.triangles())
    }
}

impl SurfaceMesh for [Triangle] {
    fn triangles(&self) -> Cow<'_, [Triangle]> {
        Cow::Borrowed(self)
    }
}

impl SurfaceMesh for Vec<Triangle> {
    fn triangles(&self) -> Cow<'_, [Triangle]> {
        Cow::Borrowed(self.as_slice())
    }
}

/// Point-in-volume predicate.
pub trait Containment {
    fn contains(&self, point: Vec3) -> bool;

    /// Batched form; returns one flag per input point, in input order.
    fn contains_batch(&self, points: &[Vec3]) -> Vec<bool> {
        points.iter().map(|&p| self.contains(p)).collect()
    }
}

impl<F> Containment for F
where
    F: Fn(Vec3) -> bool,
{
    #[inline]
    fn contains(&self, point: Vec3) -> bool {
        self(point)
    }
}

impl Containment for Aabb {
    #[inline]
    fn contains(&self, point: Vec3) -> bool {
        self.contains_point(point)
    }
}
