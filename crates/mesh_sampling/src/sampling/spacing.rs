//! Minimum-spacing point filters.
//!
//! A [`SpacingFilter`] thins a point set so that no two kept points are closer than a
//! radius. The even-spacing surface sampler consumes any implementation; the crate
//! ships [`GreedySpacingFilter`], which keeps points in input order.
use std::collections::HashMap;

use glam::{I64Vec3, Vec3};

/// Output of a spacing filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacingResult {
    /// Surviving points, in input order.
    pub kept: Vec<Vec3>,
    /// One flag per input point; `true` when that point is in `kept`.
    pub mask: Vec<bool>,
}

/// Trait for minimum-spacing filters.
pub trait SpacingFilter: Send + Sync {
    fn filter(&self, points: &[Vec3], radius: f32) -> SpacingResult;
}

/// Keeps a point when no previously kept point lies closer than the radius.
///
/// Neighbour lookups go through a hash grid with cells one radius wide, so only the
/// 27 surrounding cells are scanned per point. Cells are keyed relative to the
/// input's minimum corner; cell coordinates saturate at the `i64` range, which only
/// merges distant cells and never hides a neighbour.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySpacingFilter;

impl SpacingFilter for GreedySpacingFilter {
    fn filter(&self, points: &[Vec3], radius: f32) -> SpacingResult {
        if !radius.is_finite() || radius <= 0.0 {
            return SpacingResult {
                kept: points.to_vec(),
                mask: vec![true; points.len()],
            };
        }

        let origin = points.iter().fold(Vec3::splat(f32::INFINITY), |lo, &p| lo.min(p));
        let mut grid = SpacingGrid::new(origin, radius);
        let mut kept = Vec::new();
        let mask = points
            .iter()
            .map(|&p| {
                let accept = grid.is_clear(p);
                if accept {
                    grid.insert(p);
                    kept.push(p);
                }
                accept
            })
            .collect();

        SpacingResult { kept, mask }
    }
}

struct SpacingGrid {
    origin: Vec3,
    inv_cell_size: f32,
    radius_squared: f32,
    cells: HashMap<I64Vec3, Vec<Vec3>>,
}

impl SpacingGrid {
    fn new(origin: Vec3, radius: f32) -> Self {
        Self {
            origin,
            inv_cell_size: 1.0 / radius,
            radius_squared: radius * radius,
            cells: HashMap::new(),
        }
    }

    #[inline]
    fn cell_of(&self, p: Vec3) -> I64Vec3 {
        let scaled = ((p - self.origin) * self.inv_cell_size).floor();
        // Float-to-int casts saturate, so huge or non-finite offsets stay in range.
        I64Vec3::new(scaled.x as i64, scaled.y as i64, scaled.z as i64)
    }

    fn is_clear(&self, p: Vec3) -> bool {
        let center = self.cell_of(p);
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let cell = I64Vec3::new(
                        center.x.saturating_add(dx),
                        center.y.saturating_add(dy),
                        center.z.saturating_add(dz),
                    );
                    if let Some(bucket) = self.cells.get(&cell) {
                        if bucket
                            .iter()
                            .any(|&q| (p - q).length_squared() < self.radius_squared)
                        {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn insert(&mut self, p: Vec3) {
        let cell = self.cell_of(p);
        self.cells.entry(cell).or_default().push(p);
    }
}
