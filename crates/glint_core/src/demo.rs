//! Built-in demo scene: a mirrored floor, a tilted green wall and four
//! spheres lit by two white lights.

use glint_math::{Color, Vec3};

use crate::{CameraSettings, Light, ObjectDescription, SceneDescription, Surface, WorldSettings};

/// The scene rendered when no scene file is given.
pub fn demo_scene() -> SceneDescription {
    let lights = vec![
        Light::new(Color::WHITE, Vec3::new(0.0, 100.0, 0.0)),
        Light::new(Color::WHITE, Vec3::new(-30.0, 50.0, 0.15)),
    ];

    let objects = vec![
        ObjectDescription::Plane {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            surface: Surface::uniform(Color::new(0.8, 0.8, 0.8)).with_mirror(0.1),
        },
        ObjectDescription::Plane {
            point: Vec3::new(5.0, 5.0, 0.0),
            normal: Vec3::new(-1.0, 0.5, -1.0),
            surface: Surface::uniform(Color::new(0.0, 1.0, 0.0)),
        },
        ObjectDescription::Sphere {
            center: Vec3::new(-5.0, 5.0, 0.0),
            radius: 10.0,
            surface: Surface::uniform(Color::new(0.3, 0.3, 1.0)).with_mirror(0.3),
        },
        ObjectDescription::Sphere {
            center: Vec3::new(-5.0, 40.0, -20.0),
            radius: 3.0,
            surface: Surface::uniform(Color::new(0.0, 1.0, 1.0)),
        },
        ObjectDescription::Sphere {
            center: Vec3::new(-25.0, 15.0, -30.0),
            radius: 10.0,
            surface: Surface::uniform(Color::new(1.0, 0.0, 1.0)),
        },
        ObjectDescription::Sphere {
            center: Vec3::new(-40.0, 10.0, 0.0),
            radius: 10.0,
            surface: Surface::uniform(Color::new(1.0, 1.0, 0.0)),
        },
    ];

    SceneDescription {
        name: "demo".to_string(),
        settings: WorldSettings::default(),
        camera: CameraSettings::default(),
        lights,
        objects,
    }
}
