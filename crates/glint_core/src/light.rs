use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// A point light. Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub color: Color,
    pub position: Vec3,
}

impl Light {
    pub fn new(color: Color, position: Vec3) -> Self {
        Self { color, position }
    }
}
