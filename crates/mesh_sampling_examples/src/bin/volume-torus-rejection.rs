use mesh_sampling::prelude::*;
use mesh_sampling_examples::{init_tracing, render_points_to_png, RenderConfig, Torus, View};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let torus = Torus::new(2.0, 0.5, 64, 32);
    let bounds = torus
        .bounds()
        .ok_or_else(|| anyhow::anyhow!("torus has no faces"))?;
    let count = 50_000;

    let mut rng = StdRng::seed_from_u64(99);
    let points = sample_volume_mesh(&torus, count, &mut rng)?;

    // Acceptance should approach torus volume / box volume.
    let torus_volume = 2.0 * std::f32::consts::PI.powi(2) * 2.0 * 0.5 * 0.5;
    tracing::info!(
        "accepted {}/{} candidates (expected ratio {:.3}, observed {:.3})",
        points.len(),
        count,
        torus_volume / bounds.volume(),
        points.len() as f32 / count as f32
    );

    let config = RenderConfig::new((1000, 1000)).with_view(View::Top);
    let shade = |i: usize| {
        let z = (points[i].z / 0.5 * 0.5 + 0.5).clamp(0.0, 1.0);
        let level = (80.0 + 175.0 * z) as u8;
        [level, level / 2, 255 - level / 2]
    };
    render_points_to_png(&points, shade, &config, "volume-torus-rejection.png")?;

    Ok(())
}
