//! The scene container: objects, lights and global shading settings.

use glint_math::Color;
use serde::{Deserialize, Serialize};

use crate::{Light, WorldObject};

/// Global settings shared by every ray cast against a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Hits at or below this distance are ignored (self-intersection guard)
    pub min_cast_distance: f32,
    /// Deepest reflection level that is still shaded
    pub max_depth: u32,
    /// Color returned for rays that escape the scene
    pub void_color: Color,
    /// Ambient light color, weighted by each surface's ambient coefficient
    pub ambient_color: Color,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            min_cast_distance: 0.001,
            max_depth: 10,
            void_color: Color::WHITE,
            ambient_color: Color::WHITE,
        }
    }
}

/// Owns every object and light of a scene.
///
/// Registration is append-only; an object's index never changes once added.
#[derive(Debug, Clone, Default)]
pub struct World {
    settings: WorldSettings,
    objects: Vec<WorldObject>,
    lights: Vec<Light>,
}

impl World {
    /// Create an empty world with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty world with the given settings.
    pub fn with_settings(settings: WorldSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Append an object and return its index.
    pub fn add_object(&mut self, object: WorldObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Append a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&WorldObject> {
        self.objects.get(index)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
