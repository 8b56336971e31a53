//! Scene description files.
//!
//! A scene is described in JSON and converted to a [`World`] plus the
//! camera placement it should be viewed from:
//!
//! ```json
//! {
//!   "name": "two spheres",
//!   "camera": { "origin": [0, 2, -10], "horizontal": 0.1, "vertical": 0.0, "viewport": 1.5 },
//!   "lights": [ { "color": [1, 1, 1], "position": [0, 100, 0] } ],
//!   "objects": [
//!     { "type": "plane", "point": [0, 0, 0], "normal": [0, 1, 0],
//!       "surface": { "kind": "pattern", "color": [0.8, 0.8, 0.8] } },
//!     { "type": "sphere", "center": [0, 1, 0], "radius": 1, "surface": { "mirror": 0.3 } }
//!   ]
//! }
//! ```

use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Light, Surface, World, WorldObject, WorldSettings};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported scene format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Where the camera starts and how wide it sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Camera position in world space
    pub origin: Vec3,
    /// Pitch in radians, clamped to [-π/2, π/2] by the camera
    pub horizontal: f32,
    /// Yaw in radians
    pub vertical: f32,
    /// Full horizontal field of view in radians
    pub viewport: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            origin: Vec3::new(-14.0, 40.0, -40.0),
            horizontal: 0.68,
            vertical: 0.25,
            viewport: 1.5,
        }
    }
}

/// One primitive in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Plane {
        point: Vec3,
        normal: Vec3,
        #[serde(default)]
        surface: Surface,
    },
    Sphere {
        center: Vec3,
        radius: f32,
        #[serde(default)]
        surface: Surface,
    },
}

impl ObjectDescription {
    /// Build the world object this entry describes.
    pub fn to_object(&self) -> WorldObject {
        match self {
            ObjectDescription::Plane {
                point,
                normal,
                surface,
            } => WorldObject::plane(*point, *normal, surface.clone()),
            ObjectDescription::Sphere {
                center,
                radius,
                surface,
            } => WorldObject::sphere(*center, *radius, surface.clone()),
        }
    }
}

/// A complete scene: settings, camera placement, lights and objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub settings: WorldSettings,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Build a [`World`], registering objects and lights in file order.
    pub fn build_world(&self) -> World {
        let mut world = World::with_settings(self.settings);
        for object in &self.objects {
            world.add_object(object.to_object());
        }
        for light in &self.lights {
            world.add_light(*light);
        }
        world
    }
}

/// Load a scene description from a `.json` file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if extension != "json" {
        return Err(LoadError::UnsupportedFormat(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;

    log::info!(
        "Loaded scene '{}' from {}: {} objects, {} lights",
        scene.name,
        path.display(),
        scene.objects.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(contents: &str) -> LoadResult<SceneDescription> {
    Ok(serde_json::from_str(contents)?)
}
