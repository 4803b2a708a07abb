use mesh_sampling::prelude::*;
use mesh_sampling_examples::{init_tracing, render_points_to_png, RenderConfig, View};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Split one large request into independently seeded streams.
    let base_seed = 31337;
    let streams = 4u64;
    let per_stream = 2500;

    let mut points = Vec::new();
    for stream in 0..streams {
        let mut rng = StdRng::seed_from_u64(seed_for_stream(base_seed, stream));
        points.extend(SphereSampling::new(per_stream).generate(&mut rng));
    }

    let mean_sq = points.iter().map(|p| *p * *p).sum::<glam::Vec3>() / points.len() as f32;
    tracing::info!(
        "{} unit vectors, mean squared coordinates {:.4} {:.4} {:.4}",
        points.len(),
        mean_sq.x,
        mean_sq.y,
        mean_sq.z
    );

    // Front view: a uniform sphere shows no banding toward the poles.
    let config = RenderConfig::new((800, 800)).with_view(View::Front);
    let shade = |i: usize| {
        let depth = ((points[i].y + 1.0) * 0.5).clamp(0.0, 1.0);
        let level = (60.0 + 195.0 * (1.0 - depth)) as u8;
        [level, level, level]
    };
    render_points_to_png(&points, shade, &config, "sphere-uniform.png")?;

    Ok(())
}
