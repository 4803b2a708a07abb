use glam::{Mat4, Quat, Vec3};
use mesh_sampling::prelude::*;
use mesh_sampling_examples::{init_tracing, palette, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(4242);

    // Three boxes with different placements, e.g. oriented bounding boxes.
    let placements = [
        Mat4::IDENTITY,
        Mat4::from_rotation_translation(Quat::from_rotation_z(0.6), Vec3::new(4.0, 0.0, 0.0)),
        transform_from_rows(&[
            [1.0, 0.0, 0.0, -3.0],
            [0.0, 0.0, -1.0, 2.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        ])?,
    ];

    let mut points = Vec::new();
    let mut labels = Vec::new();
    for (label, placement) in placements.into_iter().enumerate() {
        let sampler = BoxSampling::new(Vec3::new(2.0, 1.0, 0.5), 4000).with_transform(placement);
        let batch = sampler.generate(&mut rng)?;
        labels.extend(std::iter::repeat_n(label, batch.len()));
        points.extend(batch);
    }

    let config = RenderConfig::new((1000, 800));
    render_points_to_png(
        &points,
        |i| palette(labels[i]),
        &config,
        "box-oriented.png",
    )?;

    Ok(())
}
