use mesh_sampling::prelude::*;
use mesh_sampling_examples::{init_tracing, render_points_to_png, RenderConfig, View};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let torus = mesh_sampling_examples::Torus::new(2.0, 0.6, 48, 24);
    let faces = Faces::Quads(torus.quads());
    let areas = faces.areas();
    let count = 1500;

    // Baseline: plain area-weighted sampling clumps and leaves gaps.
    let mut rng = StdRng::seed_from_u64(7);
    let plain = sample_surface_mesh(&torus, count, None, &mut rng)?;

    // Even spacing: oversample, thin to the derived radius, truncate.
    let mut rng = StdRng::seed_from_u64(7);
    let even = EvenSurfaceSampling::new(count).generate(faces, &areas, &mut rng)?;
    if even.is_complete() {
        tracing::info!("even sampling produced all {} points", even.len());
    } else {
        tracing::info!(
            "even sampling fell {} short of {}; callers must use the returned length",
            even.shortfall(),
            count
        );
    }

    // Tighter spacing than the quads can hold shows the shortfall path.
    let mut rng = StdRng::seed_from_u64(7);
    let sparse = EvenSurfaceSampling::new(count)
        .with_radius(0.4)
        .generate(faces, &areas, &mut rng)?;
    tracing::info!("radius 0.4 kept {}/{} points", sparse.len(), count);

    let config = RenderConfig::new((900, 900))
        .with_view(View::Top)
        .with_point_radius(2);
    let white = |_: usize| [235u8, 235, 235];
    render_points_to_png(&plain.points, white, &config, "surface-plain.png")?;
    render_points_to_png(&even.points, white, &config, "surface-even-spacing.png")?;
    render_points_to_png(&sparse.points, white, &config, "surface-even-sparse.png")?;

    Ok(())
}
