//! Minimal point-cloud rasterizer used by the example binaries.
use anyhow::Context;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Orthographic view direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Looking down -Z.
    Top,
    /// Looking along +Y.
    Front,
    /// Looking along -X.
    Side,
    Isometric,
}

impl View {
    /// Projects to image-plane coordinates with +Y up.
    fn project(self, p: Vec3) -> Vec2 {
        match self {
            View::Top => Vec2::new(p.x, p.y),
            View::Front => Vec2::new(p.x, p.z),
            View::Side => Vec2::new(p.y, p.z),
            View::Isometric => {
                let (s, c) = (30.0_f32.to_radians().sin(), 30.0_f32.to_radians().cos());
                Vec2::new((p.x - p.y) * c, p.z + (p.x + p.y) * s)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub view: View,
    pub background: [u8; 3],
    pub point_radius: i32,
    /// Margin around the projected points, as a fraction of the image size.
    pub padding: f32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            view: View::Isometric,
            background: [24, 24, 28],
            point_radius: 1,
            padding: 0.05,
        }
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_radius(mut self, radius: i32) -> Self {
        self.point_radius = radius;
        self
    }
}

/// Color for an integer label such as a face index.
pub fn palette(label: usize) -> [u8; 3] {
    const COLORS: [[u8; 3]; 8] = [
        [230, 97, 1],
        [253, 184, 99],
        [178, 171, 210],
        [94, 60, 153],
        [102, 194, 165],
        [252, 141, 98],
        [141, 160, 203],
        [231, 138, 195],
    ];
    COLORS[label % COLORS.len()]
}

/// Draws `points` as filled discs, scaled to fit the image, and writes a PNG.
pub fn render_points_to_png(
    points: &[Vec3],
    color_of: impl Fn(usize) -> [u8; 3],
    config: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let projected: Vec<Vec2> = points.iter().map(|&p| config.view.project(p)).collect();
    let (lo, hi) = projected
        .iter()
        .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(lo, hi), &p| {
            (lo.min(p), hi.max(p))
        });
    let span = (hi - lo).max(Vec2::splat(1e-6));
    let usable = Vec2::new(w as f32, h as f32) * (1.0 - 2.0 * config.padding);
    let scale = (usable / span).min_element();
    let offset = (Vec2::new(w as f32, h as f32) - span * scale) * 0.5;

    let r = config.point_radius;
    for (i, p) in projected.iter().enumerate() {
        let q = (*p - lo) * scale + offset;
        let cx = q.x.round() as i32;
        let cy = h as i32 - 1 - q.y.round() as i32;
        let color = Rgb(color_of(i));
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    img.save(path)
        .with_context(|| format!("failed to write {path}"))?;
    tracing::info!("wrote {} points to {}", points.len(), path);
    Ok(())
}
