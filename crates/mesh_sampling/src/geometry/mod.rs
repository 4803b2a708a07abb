//! Geometric primitives consumed by the samplers.
//!
//! Faces are plain vertex arrays ([`Triangle`], [`Quad`]) so callers can hand over
//! slices from any mesh representation. [`mesh`] defines the seams for host meshes
//! and containment predicates.
use glam::{Mat4, Vec3};

use crate::error::{Error, Result};

pub mod mesh;

/// A triangle as three ordered vertices. `v1 - v0` and `v2 - v0` span the face.
pub type Triangle = [Vec3; 3];

/// A planar quad as four ordered vertices, split along the `v0`-`v2` diagonal.
pub type Quad = [Vec3; 4];

/// Builds a [`Triangle`] from any `mint`-compatible vector type.
pub fn triangle<P: Into<mint::Vector3<f32>>>(a: P, b: P, c: P) -> Triangle {
    [
        Vec3::from(a.into()),
        Vec3::from(b.into()),
        Vec3::from(c.into()),
    ]
}

/// Borrowed face set of a triangle or quad mesh.
#[derive(Debug, Clone, Copy)]
pub enum Faces<'a> {
    Triangles(&'a [Triangle]),
    Quads(&'a [Quad]),
}

impl Faces<'_> {
    /// Number of faces.
    pub fn len(&self) -> usize {
        match self {
            Faces::Triangles(t) => t.len(),
            Faces::Quads(q) => q.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vertices per face (3 or 4).
    pub fn vertices_per_face(&self) -> usize {
        match self {
            Faces::Triangles(_) => 3,
            Faces::Quads(_) => 4,
        }
    }

    /// Per-face areas. Quads report the sum of both halves.
    pub fn areas(&self) -> Vec<f32> {
        match self {
            Faces::Triangles(t) => triangle_areas(t),
            Faces::Quads(q) => q
                .iter()
                .map(|quad| {
                    let (a, b) = split_quad(quad);
                    triangle_area(&a) + triangle_area(&b)
                })
                .collect(),
        }
    }
}

/// Area of a single triangle.
#[inline]
pub fn triangle_area(t: &Triangle) -> f32 {
    0.5 * (t[1] - t[0]).cross(t[2] - t[0]).length()
}

/// Areas of every triangle, index-aligned with the input.
pub fn triangle_areas(triangles: &[Triangle]) -> Vec<f32> {
    triangles.iter().map(triangle_area).collect()
}

/// Splits a quad into the halves `(v0, v1, v2)` and `(v0, v2, v3)`.
#[inline]
pub fn split_quad(q: &Quad) -> (Triangle, Triangle) {
    ([q[0], q[1], q[2]], [q[0], q[2], q[3]])
}

/// Splits every quad, returning the first and second halves as two aligned sets.
pub fn split_quads(quads: &[Quad]) -> (Vec<Triangle>, Vec<Triangle>) {
    quads.iter().map(split_quad).unzip()
}

/// Converts an azimuth `theta` and polar angle `phi` (radians) into a unit vector.
#[inline]
pub fn spherical_to_vector(theta: f32, phi: f32) -> Vec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vec3::new(sin_p * cos_t, sin_p * sin_t, cos_p)
}

/// Builds a homogeneous transform from four row-major rows.
///
/// Rejects anything other than exactly four rows, and non-finite entries.
pub fn transform_from_rows(rows: &[[f32; 4]]) -> Result<Mat4> {
    let rows: &[[f32; 4]; 4] = rows.try_into().map_err(|_| {
        Error::invalid_input(
            "transform",
            format!("expected a 4x4 matrix, got {} rows", rows.len()),
        )
    })?;
    let matrix = Mat4::from_cols_array_2d(rows).transpose();
    if !matrix.is_finite() {
        return Err(Error::invalid_input(
            "transform",
            "matrix contains non-finite entries",
        ));
    }
    Ok(matrix)
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given extents centered on the origin.
    pub fn centered(extents: Vec3) -> Self {
        let half = extents * 0.5;
        Self::new(-half, half)
    }

    /// Tight bounds of a triangle set, or `None` when it is empty.
    pub fn from_triangles(triangles: &[Triangle]) -> Option<Self> {
        let mut vertices = triangles.iter().flatten();
        let first = *vertices.next()?;
        let (min, max) = vertices.fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(Self::new(min, max))
    }

    /// Side lengths along each axis.
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Closed containment test.
    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn volume(&self) -> f32 {
        let e = self.extents().max(Vec3::ZERO);
        e.x * e.y * e.z
    }
}
