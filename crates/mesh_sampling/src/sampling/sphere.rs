//! Uniform sampling on the surface of the unit sphere.
use std::f32::consts::TAU;

use glam::Vec3;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::spherical_to_vector;
use crate::sampling::{rand01, PointSampling};

/// Uniform unit-sphere sampling.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereSampling {
    /// Number of points to generate.
    pub count: usize,
}

impl SphereSampling {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn generate(&self, rng: &mut dyn RngCore) -> Vec<Vec3> {
        sample_sphere(self.count, rng)
    }
}

impl PointSampling for SphereSampling {
    fn generate_points(&self, rng: &mut dyn RngCore) -> Result<Vec<Vec3>> {
        Ok(self.generate(rng))
    }
}

/// Draw `count` unit vectors uniformly distributed by area over the sphere.
///
/// The polar angle is `acos(2v - 1)` rather than `pi * v`; the latter would bunch
/// points at the poles.
pub fn sample_sphere(count: usize, rng: &mut dyn RngCore) -> Vec<Vec3> {
    let u: Vec<f32> = (0..count).map(|_| rand01(rng)).collect();
    let v: Vec<f32> = (0..count).map(|_| rand01(rng)).collect();

    u.iter()
        .zip(&v)
        .map(|(&u, &v)| {
            let theta = TAU * u;
            let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
            spherical_to_vector(theta, phi)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::FixedRng;

    #[test]
    fn points_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = sample_sphere(1000, &mut rng);
        assert_eq!(points.len(), 1000);
        for p in points {
            assert!((p.length() - 1.0).abs() < 1e-5, "{p} has length {}", p.length());
        }
    }

    #[test]
    fn squared_coordinates_average_one_third() {
        let mut rng = StdRng::seed_from_u64(2);
        let count = 100_000;
        let points = SphereSampling::new(count).generate(&mut rng);

        let mean_sq = points
            .iter()
            .fold(glam::DVec3::ZERO, |acc, p| acc + (*p * *p).as_dvec3())
            / count as f64;
        for axis in [mean_sq.x, mean_sq.y, mean_sq.z] {
            assert!((axis - 1.0 / 3.0).abs() < 0.01, "mean square {axis}");
        }
    }

    #[test]
    fn hemispheres_are_balanced() {
        let mut rng = StdRng::seed_from_u64(3);
        let count = 40_000;
        let points = sample_sphere(count, &mut rng);
        let north = points.iter().filter(|p| p.z > 0.0).count();
        let share = north as f64 / count as f64;
        assert!((share - 0.5).abs() < 4.0 * (0.25 / count as f64).sqrt());
    }

    #[test]
    fn determinism_for_same_seed() {
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = sample_sphere(4, &mut rng_a);
        let b = sample_sphere(4, &mut rng_b);
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);

        let mut rng_c = StdRng::seed_from_u64(456);
        assert_ne!(a, sample_sphere(4, &mut rng_c));
    }

    #[test]
    fn zero_draws_map_to_south_pole() {
        let mut rng = FixedRng { value: 0 };
        let points = sample_sphere(2, &mut rng);
        for p in points {
            assert!((p - Vec3::NEG_Z).length() < 1e-6);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(sample_sphere(0, &mut rng).is_empty());
    }
}
