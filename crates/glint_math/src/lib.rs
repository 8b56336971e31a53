// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
mod ray;
mod rotation;

pub use color::Color;
pub use interval::Interval;
pub use ray::Ray;
pub use rotation::{orientation, to_world, Mat3Ext};
