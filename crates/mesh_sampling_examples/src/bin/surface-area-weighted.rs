use mesh_sampling::prelude::*;
use mesh_sampling_examples::{init_tracing, palette, render_points_to_png, RenderConfig, Torus};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Coarse torus so individual quads are visible through the coloring.
    let torus = Torus::new(2.0, 0.6, 24, 12);
    let mut rng = StdRng::seed_from_u64(2025);

    let samples = sample_surface_mesh(&torus, 20_000, None, &mut rng)?;
    tracing::info!(
        "sampled {} points over {} triangles (area {:.3})",
        samples.len(),
        torus.triangles().len(),
        torus.total_area()
    );

    let config = RenderConfig::new((1000, 1000));
    render_points_to_png(
        &samples.points,
        |i| palette(samples.face_index[i] / 2),
        &config,
        "surface-area-weighted.png",
    )?;

    Ok(())
}
