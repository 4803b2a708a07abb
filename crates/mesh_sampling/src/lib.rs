#![forbid(unsafe_code)]
//! mesh_sampling: Random point generation on and inside triangulated geometry.
//!
//! Modules:
//! - geometry: triangle/quad face types, bounds, and the mesh and containment seams
//! - sampling: surface, even-spacing, volume, box, and unit-sphere samplers
//!
//! Every sampler is a pure batch operation driven by a caller-supplied [`rand::RngCore`];
//! seeding the RNG makes the output reproducible.
pub mod error;
pub mod geometry;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use mesh_sampling::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::mesh::{Containment, SurfaceMesh};
    pub use crate::geometry::{
        spherical_to_vector, transform_from_rows, triangle, triangle_area, triangle_areas, Aabb,
        Faces, Quad, Triangle,
    };
    pub use crate::sampling::even::{
        sample_surface_even, sample_surface_even_mesh, EvenSurfaceSampling,
    };
    pub use crate::sampling::spacing::{GreedySpacingFilter, SpacingFilter, SpacingResult};
    pub use crate::sampling::sphere::{sample_sphere, SphereSampling};
    pub use crate::sampling::surface::{
        sample_surface, sample_surface_mesh, sample_surface_weighted, SurfaceSampling,
    };
    pub use crate::sampling::volume::{
        sample_box, sample_volume, sample_volume_mesh, BoxSampling, VolumeSampling,
    };
    pub use crate::sampling::{seed_for_stream, PointSampling, SurfaceSamples};
}
