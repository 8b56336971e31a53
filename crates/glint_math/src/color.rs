//! Saturating RGB color.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Interval, Vec3};

/// An RGB color whose channels always lie in [0, 1].
///
/// Every constructor and every arithmetic combination clamps, so a `Color`
/// can be written straight into a display buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color, clamping each channel into [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: Interval::UNIT.clamp(r),
            g: Interval::UNIT.clamp(g),
            b: Interval::UNIT.clamp(b),
        }
    }

    /// Channel-wise minimum of two colors.
    ///
    /// This is the final compositing operator of the shader: the surface color
    /// is capped by the light that reaches it.
    pub fn min(self, other: Color) -> Self {
        Self {
            r: self.r.min(other.r),
            g: self.g.min(other.g),
            b: self.b.min(other.b),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to 8-bit RGBA with an opaque alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (255.0 * self.r).round() as u8,
            (255.0 * self.g).round() as u8,
            (255.0 * self.b).round() as u8,
            255,
        ]
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, scalar: f32) -> Color {
        Color::new(self.r * scalar, self.g * scalar, self.b * scalar)
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}
