//! Camera for primary ray generation.

use glint_core::CameraSettings;
use glint_math::{orientation, to_world, Mat3, Ray, Vec3};
use std::f32::consts::FRAC_PI_2;

/// A pinhole camera with pitch and yaw but no roll.
///
/// The camera is mutated in place by movement and rotation commands; the
/// owner is expected to restart refinement after every change.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    width: u32,
    height: u32,

    // Positioning
    origin: Vec3,
    horizontal: f32, // Pitch in radians, kept within [-π/2, π/2]
    vertical: f32,   // Yaw in radians
    rotation: Mat3,

    // Lens
    viewport: f32, // Full horizontal field of view in radians
    pixel_size: f32,
}

impl Camera {
    /// Create a camera for a `width` x `height` canvas.
    pub fn new(
        width: u32,
        height: u32,
        origin: Vec3,
        horizontal: f32,
        vertical: f32,
        viewport: f32,
    ) -> Self {
        let mut camera = Self {
            width,
            height,
            origin,
            horizontal: 0.0,
            vertical: 0.0,
            rotation: Mat3::IDENTITY,
            viewport,
            pixel_size: 0.0,
        };
        camera.set_rotation(horizontal, vertical);
        camera.resize(width, height);
        camera
    }

    /// Create a camera from a scene file's camera block.
    pub fn from_settings(settings: &CameraSettings, width: u32, height: u32) -> Self {
        Self::new(
            width,
            height,
            settings.origin,
            settings.horizontal,
            settings.vertical,
            settings.viewport,
        )
    }

    /// Adapt to a new canvas size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixel_size = (self.viewport / 2.0).tan() / width.max(1) as f32;
    }

    /// Generate the ray through pixel (x, y), measured from the bottom-left.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let rel_x = i64::from(x) - i64::from(self.width / 2);
        let rel_y = i64::from(y) - i64::from(self.height / 2);
        let local = Vec3::new(
            rel_x as f32 * self.pixel_size,
            rel_y as f32 * self.pixel_size,
            1.0,
        );

        Ray::new(self.origin, to_world(&self.rotation, local))
    }

    /// Move relative to the current facing: origin += rotation * delta.
    pub fn move_relative(&mut self, delta: Vec3) {
        self.origin += to_world(&self.rotation, delta);
    }

    /// Add to pitch and yaw.
    pub fn rotate_relative(&mut self, d_horizontal: f32, d_vertical: f32) {
        self.set_rotation(self.horizontal + d_horizontal, self.vertical + d_vertical);
    }

    /// Set pitch and yaw, clamping pitch to [-π/2, π/2].
    pub fn set_rotation(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal = horizontal.clamp(-FRAC_PI_2, FRAC_PI_2);
        self.vertical = vertical;
        self.rotation = orientation(self.horizontal, self.vertical);
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn rotation(&self) -> Mat3 {
        self.rotation
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    fn level_camera() -> Camera {
        Camera::new(100, 80, Vec3::ZERO, 0.0, 0.0, 1.5)
    }

    #[test]
    fn test_center_ray_looks_forward() {
        let camera = level_camera();
        let ray = camera.get_ray(50, 40);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert_vec_eq(ray.direction(), Vec3::Z);
    }

    #[test]
    fn test_pixel_offsets() {
        let camera = level_camera();
        let expected_size = (0.75f32).tan() / 100.0;
        assert!((camera.pixel_size() - expected_size).abs() < 1e-7);

        let right = camera.get_ray(99, 40).direction();
        assert!(right.x > 0.0 && right.y.abs() < 1e-6);

        let low = camera.get_ray(50, 0).direction();
        assert!(low.y < 0.0 && low.x.abs() < 1e-6);

        let corner = camera.get_ray(0, 0);
        let local = Vec3::new(-50.0 * expected_size, -40.0 * expected_size, 1.0);
        assert_vec_eq(corner.direction(), local.normalize());
    }

    #[test]
    fn test_rays_are_unit_length() {
        let camera = Camera::new(64, 48, Vec3::new(1.0, 2.0, 3.0), 0.68, 0.25, 1.5);
        for (x, y) in [(0, 0), (63, 47), (10, 40), (32, 24)] {
            let ray = camera.get_ray(x, y);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_resize_updates_pixel_size() {
        let mut camera = level_camera();
        camera.resize(200, 80);
        assert!((camera.pixel_size() - (0.75f32).tan() / 200.0).abs() < 1e-7);
        assert_vec_eq(camera.get_ray(100, 40).direction(), Vec3::Z);
    }

    #[test]
    fn test_move_relative_follows_facing() {
        let mut camera = level_camera();
        camera.move_relative(Vec3::new(0.0, 0.0, 1.0));
        assert_vec_eq(camera.origin(), Vec3::Z);

        camera.rotate_relative(0.0, FRAC_PI_2);
        camera.move_relative(Vec3::new(0.0, 0.0, 2.0));
        assert_vec_eq(camera.origin(), Vec3::new(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = level_camera();
        camera.rotate_relative(10.0, 0.0);
        assert_eq!(camera.horizontal(), FRAC_PI_2);

        camera.rotate_relative(-100.0, 0.5);
        assert_eq!(camera.horizontal(), -FRAC_PI_2);
        assert_eq!(camera.vertical(), 0.5);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = level_camera();
        camera.rotate_relative(0.0, 7.0);
        camera.rotate_relative(0.0, 7.0);
        assert_eq!(camera.vertical(), 14.0);
    }

    #[test]
    fn test_from_settings() {
        let settings = CameraSettings::default();
        let camera = Camera::from_settings(&settings, 150, 100);

        assert_eq!(camera.origin(), settings.origin);
        assert_eq!(camera.horizontal(), settings.horizontal);
        assert_eq!(camera.vertical(), settings.vertical);
        assert_eq!((camera.width(), camera.height()), (150, 100));
    }
}
