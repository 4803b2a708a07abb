#![forbid(unsafe_code)]

mod rendering;
mod shapes;

pub use rendering::{init_tracing, palette, render_points_to_png, RenderConfig, View};
pub use shapes::Torus;
