//! Glint Renderer - progressive CPU ray tracing.
//!
//! A Whitted-style ray tracer with Phong shading and mirror reflection,
//! refined coarse-to-fine one block at a time so a display layer can show a
//! rough image immediately and sharpen it between input events.

mod camera;
mod context;
mod refine;
mod renderer;
mod tracer;

pub use camera::Camera;
pub use context::{Block, RenderContext};
pub use refine::{Rect, RefineState, RefineStep, Refiner};
pub use renderer::{Canvas, RenderConfig};
pub use tracer::{cast_ray, color_for_ray, ray_color, Hit, TraceStats};

/// Re-export the math and scene types the renderer API is expressed in
pub use glint_core::{SceneDescription, World};
pub use glint_math::{Color, Ray, Vec3};
