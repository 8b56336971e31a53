//! Glint Core - Scene model for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene model**: `World`, `WorldObject` (planes and spheres), `Surface`, `Light`
//! - **Scene files**: JSON scene description loading
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("assets/demo_scene.json")?;
//! let world = scene.build_world();
//! println!("Loaded {} objects, {} lights",
//!     world.object_count(),
//!     world.light_count());
//! ```

pub mod demo;
pub mod light;
pub mod object;
pub mod scene;
pub mod surface;
pub mod world;

// Re-export commonly used types
pub use demo::demo_scene;
pub use light::Light;
pub use object::{Hittable, Plane, Shape, Sphere, WorldObject};
pub use scene::{
    load_scene, load_scene_from_str, CameraSettings, LoadError, LoadResult, ObjectDescription,
    SceneDescription,
};
pub use surface::{Surface, SurfaceKind};
pub use world::{World, WorldSettings};
