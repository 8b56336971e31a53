//! Surface (material) description for Phong shading with mirror reflection.

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// How a surface derives its base color from the hit point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// The same color everywhere.
    #[default]
    Uniform,
    /// Color modulated by `sin(|x| mod π) * sin(|z| mod π)`, a soft checker in
    /// the XZ plane.
    Pattern,
}

/// A material: base color plus Phong and mirror coefficients.
///
/// Coefficients are used as given. Nothing here is range-checked; only the
/// colors produced while shading are clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
    pub kind: SurfaceKind,
    /// Base color (RGB, 0-1)
    pub color: Color,
    /// Weight of the world's ambient light
    pub ambient: f32,
    /// Lambert term weight
    pub diffuse: f32,
    /// Blinn-Phong highlight weight
    pub specular: f32,
    /// Highlight sharpness
    pub phong_exponent: i32,
    /// Blend weight of the reflected color (0 = matte)
    pub mirror: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            kind: SurfaceKind::Uniform,
            color: Color::new(1.0, 0.0, 0.0),
            ambient: 0.3,
            diffuse: 0.4,
            specular: 0.5,
            phong_exponent: 20,
            mirror: 0.0,
        }
    }
}

impl Surface {
    /// Create a uniform surface with the default coefficients.
    pub fn uniform(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Create a patterned surface with the default coefficients.
    pub fn pattern(color: Color) -> Self {
        Self {
            kind: SurfaceKind::Pattern,
            color,
            ..Default::default()
        }
    }

    /// Set the base color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set ambient, diffuse and specular weights.
    pub fn with_shading(mut self, ambient: f32, diffuse: f32, specular: f32) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    /// Set the Phong exponent.
    pub fn with_phong(mut self, exponent: i32) -> Self {
        self.phong_exponent = exponent;
        self
    }

    /// Set the mirror coefficient.
    pub fn with_mirror(mut self, mirror: f32) -> Self {
        self.mirror = mirror;
        self
    }

    /// Base color at a world-space point.
    pub fn color_at(&self, point: Vec3) -> Color {
        match self.kind {
            SurfaceKind::Uniform => self.color,
            SurfaceKind::Pattern => {
                let fx = (point.x.abs() % PI).sin();
                let fz = (point.z.abs() % PI).sin();
                self.color * (fx * fz)
            }
        }
    }

    /// Whether shading this surface spawns a reflection ray.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.mirror != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_defaults() {
        let s = Surface::default();
        assert_eq!(s.color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(s.ambient, 0.3);
        assert_eq!(s.diffuse, 0.4);
        assert_eq!(s.specular, 0.5);
        assert_eq!(s.phong_exponent, 20);
        assert!(!s.is_reflective());
    }

    #[test]
    fn test_uniform_ignores_point() {
        let s = Surface::uniform(Color::new(0.2, 0.4, 0.6));
        assert_eq!(s.color_at(Vec3::ZERO), s.color_at(Vec3::new(7.0, -3.0, 11.0)));
    }

    #[test]
    fn test_pattern_peaks_and_vanishes() {
        let s = Surface::pattern(Color::new(1.0, 0.5, 0.0));

        let peak = s.color_at(Vec3::new(FRAC_PI_2, 100.0, -FRAC_PI_2));
        assert!((peak.r - 1.0).abs() < 1e-5);
        assert!((peak.g - 0.5).abs() < 1e-5);

        let dark = s.color_at(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(dark, Color::BLACK);
    }

    #[test]
    fn test_coefficients_are_not_validated() {
        let s = Surface::default().with_shading(-1.0, 5.0, 2.5).with_mirror(1.5);
        assert_eq!(s.ambient, -1.0);
        assert_eq!(s.diffuse, 5.0);
        assert_eq!(s.mirror, 1.5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: Surface = serde_json::from_str(r#"{"kind": "pattern", "mirror": 0.25}"#).unwrap();
        assert_eq!(s.kind, SurfaceKind::Pattern);
        assert_eq!(s.mirror, 0.25);
        assert_eq!(s.phong_exponent, 20);
    }
}
