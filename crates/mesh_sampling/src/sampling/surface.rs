//! Weight-proportional point sampling on a triangle set.
//!
//! Faces are picked by inverse-CDF lookup over cumulative weights, then a point is
//! placed uniformly inside the picked face by folding a unit-square draw into the
//! triangle (Turk's method).
use glam::Vec3;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::mesh::SurfaceMesh;
use crate::geometry::{triangle_areas, Triangle};
use crate::sampling::{rand01, rand01_f64, SurfaceSamples};

/// Surface sampling configuration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceSampling {
    /// Number of points to draw.
    pub count: usize,
    /// Per-face weights. Face areas are used when `None`.
    pub weights: Option<Vec<f32>>,
}

impl SurfaceSampling {
    /// Create an area-weighted surface sampler that draws `count` points.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            weights: None,
        }
    }

    /// Weight faces by `weights` instead of by area.
    pub fn with_weights(mut self, weights: Vec<f32>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn generate(
        &self,
        triangles: &[Triangle],
        rng: &mut dyn RngCore,
    ) -> Result<SurfaceSamples> {
        match &self.weights {
            Some(weights) => sample_surface_weighted(triangles, weights, self.count, rng),
            None => sample_surface(triangles, self.count, rng),
        }
    }
}

/// Sample `count` points on `triangles`, weighted by face area.
pub fn sample_surface(
    triangles: &[Triangle],
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<SurfaceSamples> {
    let areas = triangle_areas(triangles);
    sample_surface_weighted(triangles, &areas, count, rng)
}

/// Sample `count` points on a mesh surface, optionally with custom face weights.
pub fn sample_surface_mesh<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    count: usize,
    face_weight: Option<&[f32]>,
    rng: &mut dyn RngCore,
) -> Result<SurfaceSamples> {
    let triangles = mesh.triangles();
    match face_weight {
        Some(weights) => sample_surface_weighted(&triangles, weights, count, rng),
        None => sample_surface_weighted(&triangles, &mesh.face_areas(), count, rng),
    }
}

/// Sample `count` points on `triangles`, picking each face with probability
/// `weights[i] / sum(weights)`.
///
/// Every returned point lies inside its reported face. All face picks are drawn
/// before any in-face coordinates.
pub fn sample_surface_weighted(
    triangles: &[Triangle],
    weights: &[f32],
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<SurfaceSamples> {
    if triangles.is_empty() {
        return Err(Error::invalid_input("triangles", "must not be empty"));
    }
    if weights.len() != triangles.len() {
        return Err(Error::invalid_input(
            "weights",
            format!(
                "expected one weight per triangle ({}), got {}",
                triangles.len(),
                weights.len()
            ),
        ));
    }

    let table = CumulativeWeights::new(weights)?;
    if count == 0 {
        return Ok(SurfaceSamples::empty(0));
    }
    if table.total() <= 0.0 {
        return Err(Error::invalid_input(
            "weights",
            "must sum to a positive value when samples are requested",
        ));
    }

    let picks: Vec<f64> = (0..count).map(|_| rand01_f64(rng)).collect();
    let face_index: Vec<usize> = picks.iter().map(|&roll| table.pick(roll)).collect();

    let lengths: Vec<(f32, f32)> = (0..count).map(|_| (rand01(rng), rand01(rng))).collect();

    let points = face_index
        .iter()
        .zip(&lengths)
        .map(|(&i, &(a, b))| point_in_triangle(&triangles[i], a, b))
        .collect();

    Ok(SurfaceSamples {
        points,
        face_index,
        requested: count,
    })
}

/// Map unit-square coordinates onto a triangle.
///
/// Pairs with `a + b > 1` fall outside the triangle and are reflected through the
/// square's center, which maps the outer half onto the inner one without distortion.
#[inline]
pub(crate) fn point_in_triangle(t: &Triangle, a: f32, b: f32) -> Vec3 {
    let (a, b) = if a + b > 1.0 {
        ((a - 1.0).abs(), (b - 1.0).abs())
    } else {
        (a, b)
    };
    t[0] + a * (t[1] - t[0]) + b * (t[2] - t[0])
}

/// Running sums of face weights for inverse-CDF face selection.
#[derive(Debug, Clone)]
pub(crate) struct CumulativeWeights {
    cumulative: Vec<f64>,
}

impl CumulativeWeights {
    pub(crate) fn new(weights: &[f32]) -> Result<Self> {
        let mut total = 0.0_f64;
        let mut cumulative = Vec::with_capacity(weights.len());
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::invalid_input(
                    "weights",
                    format!("weight {i} is {w}, expected a finite value >= 0"),
                ));
            }
            total += w as f64;
            cumulative.push(total);
        }
        Ok(Self { cumulative })
    }

    #[inline]
    pub(crate) fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Smallest index whose cumulative weight reaches `roll * total`, for `roll` in [0, 1).
    #[inline]
    pub(crate) fn pick(&self, roll: f64) -> usize {
        // A zero target would match leading zero-weight faces.
        let target = (roll * self.total()).max(f64::MIN_POSITIVE);
        self.cumulative
            .partition_point(|&c| c < target)
            .min(self.cumulative.len() - 1)
    }
}
