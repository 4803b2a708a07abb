//! Approximately evenly spaced surface sampling.
//!
//! Candidates are oversampled with [`crate::sampling::surface`], thinned once by a
//! [`SpacingFilter`], then truncated to the requested count. There is no retry: when
//! the filter leaves fewer points than requested, the shorter set is returned and a
//! warning is logged.
use glam::Vec3;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::geometry::mesh::SurfaceMesh;
use crate::geometry::{split_quads, triangle_areas, Faces, Quad};
use crate::sampling::spacing::{GreedySpacingFilter, SpacingFilter, SpacingResult};
use crate::sampling::surface::sample_surface_weighted;
use crate::sampling::SurfaceSamples;

/// Candidates drawn per requested point on triangle meshes.
pub const TRIANGLE_OVERSAMPLE: usize = 3;
/// Candidates drawn per requested point from each half of a quad mesh.
pub const QUAD_HALF_OVERSAMPLE: usize = 2;

/// Even-spacing surface sampling configuration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvenSurfaceSampling {
    /// Number of points to return at most.
    pub count: usize,
    /// Minimum spacing between points. Derived from surface area when `None`.
    pub radius: Option<f32>,
}

impl EvenSurfaceSampling {
    /// Create an even-spacing sampler targeting `count` points.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            radius: None,
        }
    }

    /// Sets an explicit minimum spacing.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "radius must be finite and >= 0, got {radius}"
                )));
            }
        }
        Ok(())
    }

    /// Samples `faces` using the default [`GreedySpacingFilter`].
    pub fn generate(
        &self,
        faces: Faces<'_>,
        areas: &[f32],
        rng: &mut dyn RngCore,
    ) -> Result<SurfaceSamples> {
        self.generate_with_filter(faces, areas, &GreedySpacingFilter, rng)
    }

    pub fn generate_with_filter(
        &self,
        faces: Faces<'_>,
        areas: &[f32],
        filter: &dyn SpacingFilter,
        rng: &mut dyn RngCore,
    ) -> Result<SurfaceSamples> {
        self.validate()?;
        sample_surface_even(faces, areas, self.count, self.radius, filter, rng)
    }
}

/// Spacing that spreads `count` points over `total_area`.
#[inline]
pub fn default_radius(total_area: f32, vertices_per_face: usize, count: usize) -> f32 {
    (total_area / (vertices_per_face as f32 * count as f32)).sqrt()
}

/// Sample up to `count` points on `faces` with pairwise spacing of at least `radius`.
///
/// `areas` holds one area per face; it drives face selection for triangle meshes
/// and the default radius for both face kinds. Quad faces are split along their
/// `v0`-`v2` diagonal and each half is sampled on its own before the candidates are
/// interleaved and filtered together. Face indices refer to `faces`.
pub fn sample_surface_even(
    faces: Faces<'_>,
    areas: &[f32],
    count: usize,
    radius: Option<f32>,
    filter: &dyn SpacingFilter,
    rng: &mut dyn RngCore,
) -> Result<SurfaceSamples> {
    if faces.is_empty() {
        return Err(Error::invalid_input("faces", "must not be empty"));
    }
    if areas.len() != faces.len() {
        return Err(Error::invalid_input(
            "areas",
            format!(
                "expected one area per face ({}), got {}",
                faces.len(),
                areas.len()
            ),
        ));
    }
    if let Some(r) = radius {
        if !r.is_finite() || r < 0.0 {
            return Err(Error::invalid_input(
                "radius",
                format!("expected a finite value >= 0, got {r}"),
            ));
        }
    }
    if count == 0 {
        return Ok(SurfaceSamples::empty(0));
    }

    let per_draw = match faces {
        Faces::Triangles(_) => oversampled(count, TRIANGLE_OVERSAMPLE)?,
        Faces::Quads(_) => oversampled(count, QUAD_HALF_OVERSAMPLE)?,
    };
    let radius = match radius {
        Some(r) => r,
        None => {
            let total_area: f32 = areas.iter().sum();
            if !total_area.is_finite() || total_area <= 0.0 {
                return Err(Error::invalid_input(
                    "areas",
                    format!("total area must be positive to derive a radius, got {total_area}"),
                ));
            }
            default_radius(total_area, faces.vertices_per_face(), count)
        }
    };

    let candidates = match faces {
        Faces::Triangles(triangles) => sample_surface_weighted(triangles, areas, per_draw, rng)?,
        Faces::Quads(quads) => sample_quad_halves(quads, per_draw, rng)?,
    };

    let SpacingResult { kept, mask } = filter.filter(&candidates.points, radius);
    if mask.len() != candidates.len() {
        return Err(Error::Other(format!(
            "spacing filter returned {} mask entries for {} points",
            mask.len(),
            candidates.len()
        )));
    }
    let face_index: Vec<usize> = candidates
        .face_index
        .iter()
        .zip(&mask)
        .filter_map(|(&face, &keep)| keep.then_some(face))
        .collect();
    if face_index.len() != kept.len() {
        return Err(Error::Other(format!(
            "spacing filter kept {} points but its mask selects {}",
            kept.len(),
            face_index.len()
        )));
    }

    let mut samples = SurfaceSamples {
        points: kept,
        face_index,
        requested: count,
    };
    if samples.len() >= count {
        samples.truncate(count);
    } else {
        warn!("only got {}/{} samples!", samples.len(), count);
    }
    Ok(samples)
}

/// Even-spacing sampling over a triangle mesh, using its face areas.
pub fn sample_surface_even_mesh<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    count: usize,
    radius: Option<f32>,
    rng: &mut dyn RngCore,
) -> Result<SurfaceSamples> {
    let triangles = mesh.triangles();
    let areas = mesh.face_areas();
    sample_surface_even(
        Faces::Triangles(&*triangles),
        &areas,
        count,
        radius,
        &GreedySpacingFilter,
        rng,
    )
}

fn oversampled(count: usize, factor: usize) -> Result<usize> {
    count.checked_mul(factor).ok_or_else(|| {
        Error::invalid_input("count", format!("{count} is too large to oversample"))
    })
}

/// Draws `per_half` points from each quad half and interleaves them as
/// `first[0], second[0], first[1], second[1], ...`.
fn sample_quad_halves(
    quads: &[Quad],
    per_half: usize,
    rng: &mut dyn RngCore,
) -> Result<SurfaceSamples> {
    let (first, second) = split_quads(quads);
    let first = sample_surface_weighted(&first, &triangle_areas(&first), per_half, rng)?;
    let second = sample_surface_weighted(&second, &triangle_areas(&second), per_half, rng)?;

    let mut points: Vec<Vec3> = Vec::with_capacity(per_half * 2);
    let mut face_index = Vec::with_capacity(per_half * 2);
    for ((a, fa), (b, fb)) in first.iter().zip(second.iter()) {
        points.extend([a, b]);
        face_index.extend([fa, fb]);
    }

    Ok(SurfaceSamples {
        points,
        face_index,
        requested: per_half * 2,
    })
}
