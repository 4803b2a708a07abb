//! Sampling strategies for drawing random points on and inside geometry.
//!
//! - [`surface`]: weight-proportional triangle picking with uniform in-triangle points
//! - [`even`]: surface sampling thinned to a minimum spacing via [`spacing`]
//! - [`volume`]: rejection sampling inside a containment predicate, and direct box sampling
//! - [`sphere`]: uniform points on the unit sphere
use glam::Vec3;
use rand::RngCore;

use crate::error::Result;

pub mod even;
pub mod spacing;
pub mod sphere;
pub mod surface;
pub mod volume;

pub use even::EvenSurfaceSampling;
pub use spacing::{GreedySpacingFilter, SpacingFilter, SpacingResult};
pub use sphere::SphereSampling;
pub use surface::SurfaceSampling;
pub use volume::{BoxSampling, VolumeSampling};

/// Trait for samplers whose domain is fully described by their own configuration.
pub trait PointSampling: Send + Sync {
    fn generate_points(&self, rng: &mut dyn RngCore) -> Result<Vec<Vec3>>;
}

/// Points drawn from a surface, each tagged with the face it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceSamples {
    /// Sampled positions.
    pub points: Vec<Vec3>,
    /// Source face of each point, parallel to `points`.
    pub face_index: Vec<usize>,
    /// Number of points the caller asked for.
    pub requested: usize,
}

impl SurfaceSamples {
    pub fn empty(requested: usize) -> Self {
        Self {
            points: Vec::new(),
            face_index: Vec::new(),
            requested,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when as many points were produced as requested.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= self.requested
    }

    /// How many requested points are missing.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.points.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec3, usize)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.face_index.iter().copied())
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
        self.face_index.truncate(len);
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    // 24 bits fill the f32 mantissa exactly, so the result never rounds up to 1.0.
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Generate a random double in the range [0, 1).
#[inline]
pub(crate) fn rand01_f64(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Derive a deterministic seed for one stream of a split request.
///
/// Large requests can be cut into independent chunks, each sampled with its own
/// RNG seeded from `seed_for_stream(base, i)`; results then do not depend on
/// how the chunks are scheduled.
pub fn seed_for_stream(base_seed: u64, stream: u64) -> u64 {
    mix_u64(base_seed ^ stream.wrapping_mul(0x9E3779B97F4A7C15))
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedRng {
        pub(crate) value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
        assert_eq!(rand01_f64(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert_eq!(result, 1.0 - 1.0 / 16_777_216.0);
    }

    #[test]
    fn rand01_values_in_range() {
        let test_values = vec![0, 1, 100, 1000, u32::MAX / 2, u32::MAX - 1, u32::MAX];

        for value in test_values {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..1.0).contains(&result),
                "rand01({}) = {} is out of range [0,1)",
                value,
                result
            );
            let result = rand01_f64(&mut rng);
            assert!((0.0..1.0).contains(&result));
        }
    }

    #[test]
    fn seed_for_stream_is_deterministic_and_distinct() {
        assert_eq!(seed_for_stream(7, 3), seed_for_stream(7, 3));
        assert_ne!(seed_for_stream(7, 3), seed_for_stream(7, 4));
        assert_ne!(seed_for_stream(7, 3), seed_for_stream(8, 3));
    }

    #[test]
    fn surface_samples_report_shortfall() {
        let mut samples = SurfaceSamples {
            points: vec![Vec3::ZERO, Vec3::X],
            face_index: vec![0, 1],
            requested: 5,
        };
        assert!(!samples.is_complete());
        assert_eq!(samples.shortfall(), 3);
        assert_eq!(samples.iter().nth(1), Some((Vec3::X, 1)));

        samples.requested = 1;
        samples.truncate(1);
        assert!(samples.is_complete());
        assert_eq!(samples.len(), 1);
        assert_eq!(samples.face_index.len(), 1);
    }
}
