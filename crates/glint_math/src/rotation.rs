// Rotation utilities for Mat3
//
// Extends glam::Mat3 with the two-axis orientation used by the camera.
// There is no roll axis.

use glam::{Mat3, Vec3};

/// Extension trait for Mat3 to compose camera orientations.
pub trait Mat3Ext {
    /// Post-multiply by a rotation about the X axis ("horizontal" / pitch).
    fn rotate_horizontal(&self, angle: f32) -> Mat3;

    /// Post-multiply by a rotation about the Y axis ("vertical" / yaw).
    fn rotate_vertical(&self, angle: f32) -> Mat3;
}

impl Mat3Ext for Mat3 {
    fn rotate_horizontal(&self, angle: f32) -> Mat3 {
        *self * Mat3::from_rotation_x(angle)
    }

    fn rotate_vertical(&self, angle: f32) -> Mat3 {
        *self * Mat3::from_rotation_y(angle)
    }
}

/// Build the orientation matrix for the given pitch and yaw.
///
/// Yaw is applied first, then pitch, so a local direction is pitched in the
/// camera's own frame before being swung around the world Y axis.
pub fn orientation(horizontal: f32, vertical: f32) -> Mat3 {
    Mat3::IDENTITY
        .rotate_vertical(vertical)
        .rotate_horizontal(horizontal)
}

/// Transform a camera-local direction into world space.
#[inline]
pub fn to_world(rotation: &Mat3, local: Vec3) -> Vec3 {
    *rotation * local
}
