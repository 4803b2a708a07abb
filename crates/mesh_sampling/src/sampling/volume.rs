//! Volume sampling: rejection sampling against a containment predicate, and direct
//! sampling inside a (possibly transformed) rectangular box.
use glam::{Mat4, Vec3};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::mesh::{Containment, SurfaceMesh};
use crate::geometry::Aabb;
use crate::sampling::{rand01, PointSampling};

/// Rejection sampling inside a containment predicate.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeSampling {
    /// Number of candidates drawn; the upper bound on returned points.
    pub count: usize,
}

impl VolumeSampling {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn generate(
        &self,
        bounds: Aabb,
        contains: &dyn Containment,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vec3>> {
        sample_volume(bounds.min, bounds.extents(), contains, self.count, rng)
    }
}

/// Draw `count` candidates uniformly in `[bounds_min, bounds_min + extents]` and keep
/// those `contains` accepts, in draw order.
///
/// One pass, no top-up: the expected yield is `count` times the ratio of the enclosed
/// volume to the box volume.
pub fn sample_volume<C: Containment + ?Sized>(
    bounds_min: Vec3,
    extents: Vec3,
    contains: &C,
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<Vec3>> {
    if !bounds_min.is_finite() {
        return Err(Error::invalid_input(
            "bounds_min",
            format!("expected finite coordinates, got {bounds_min}"),
        ));
    }
    check_extents(extents)?;

    let candidates: Vec<Vec3> = (0..count)
        .map(|_| bounds_min + random_unit_cube(rng) * extents)
        .collect();

    let inside = contains.contains_batch(&candidates);
    if inside.len() != candidates.len() {
        return Err(Error::Other(format!(
            "containment returned {} flags for {} points",
            inside.len(),
            candidates.len()
        )));
    }

    let mut samples: Vec<Vec3> = candidates
        .into_iter()
        .zip(inside)
        .filter_map(|(p, keep)| keep.then_some(p))
        .collect();
    samples.truncate(count);

    debug!(
        accepted = samples.len(),
        requested = count,
        "volume rejection sampling finished"
    );
    Ok(samples)
}

/// Rejection sampling inside a mesh's own bounds, using the mesh as the predicate.
pub fn sample_volume_mesh<M>(mesh: &M, count: usize, rng: &mut dyn RngCore) -> Result<Vec<Vec3>>
where
    M: SurfaceMesh + Containment + ?Sized,
{
    let bounds = mesh
        .bounds()
        .ok_or_else(|| Error::invalid_input("mesh", "has no triangles"))?;
    sample_volume(bounds.min, bounds.extents(), mesh, count, rng)
}

/// Direct sampling inside a box centered at the origin, optionally placed by a
/// homogeneous transform.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSampling {
    /// Side lengths of the box.
    pub extents: Vec3,
    /// Number of points to generate.
    pub count: usize,
    /// Placement applied to every point, translation included.
    pub transform: Option<Mat4>,
}

impl BoxSampling {
    /// Create a box sampler for `count` points inside a box of side lengths `extents`.
    pub fn new(extents: impl Into<mint::Vector3<f32>>, count: usize) -> Self {
        Self {
            extents: Vec3::from(extents.into()),
            count,
            transform: None,
        }
    }

    /// Sets the placement transform.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<Vec3>> {
        sample_box(self.extents, self.count, self.transform, rng)
    }
}

impl PointSampling for BoxSampling {
    fn generate_points(&self, rng: &mut dyn RngCore) -> Result<Vec<Vec3>> {
        self.generate(rng)
    }
}

/// Draw exactly `count` points uniformly inside a box of side lengths `extents`
/// centered at the origin, then apply `transform` if given.
///
/// The transform is applied as an affine map (`M * [p, 1]`, dropping `w`).
pub fn sample_box(
    extents: Vec3,
    count: usize,
    transform: Option<Mat4>,
    rng: &mut dyn RngCore,
) -> Result<Vec<Vec3>> {
    check_extents(extents)?;
    if let Some(m) = transform {
        if !m.is_finite() {
            return Err(Error::invalid_input(
                "transform",
                "matrix contains non-finite entries",
            ));
        }
    }

    let mut samples: Vec<Vec3> = (0..count)
        .map(|_| (random_unit_cube(rng) - 0.5) * extents)
        .collect();

    if let Some(m) = transform {
        for p in &mut samples {
            *p = m.transform_point3(*p);
        }
    }
    Ok(samples)
}

#[inline]
fn random_unit_cube(rng: &mut dyn RngCore) -> Vec3 {
    let x = rand01(rng);
    let y = rand01(rng);
    let z = rand01(rng);
    Vec3::new(x, y, z)
}

fn check_extents(extents: Vec3) -> Result<()> {
    if !extents.is_finite() || extents.min_element() <= 0.0 {
        return Err(Error::invalid_input(
            "extents",
            format!("expected finite, positive side lengths, got {extents}"),
        ));
    }
    Ok(())
}
