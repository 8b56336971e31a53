//! Hittable trait and the analytic primitives of the scene.

use glint_math::{Ray, Vec3};

use crate::Surface;

/// Trait for geometry that can be hit by rays.
pub trait Hittable {
    /// Signed distance along `ray` to the surface, or `None` when the ray
    /// cannot reach it.
    ///
    /// A returned distance may be zero or negative (the surface lies behind
    /// the origin); callers decide which distances count as hits.
    fn distance(&self, ray: &Ray) -> Option<f32>;

    /// Surface normal at a point known to lie on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Point where `ray` meets the surface: origin + direction * distance.
    fn intersection(&self, ray: &Ray) -> Option<Vec3> {
        self.distance(ray).map(|t| ray.at(t))
    }
}

/// An infinite plane through `point` with unit normal `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized; a zero normal yields a plane
    /// that no ray can hit.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        let unit = normal.normalize_or_zero();
        if unit == Vec3::ZERO {
            log::warn!("Plane through {} has a zero-length normal and will never be hit", point);
        }
        Self {
            point,
            normal: unit,
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn distance(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom == 0.0 {
            // Parallel (or degenerate) ray
            return None;
        }
        Some(-self.normal.dot(ray.origin() - self.point) / denom)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn distance(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let far = (-b + sqrtd) / (2.0 * a);
        if far <= 0.0 {
            // Sphere lies entirely behind the origin
            return None;
        }

        let near = (-b - sqrtd) / (2.0 * a);
        // Origin inside the sphere: only the far root is in front
        Some(if near > 0.0 { near } else { far })
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }
}

/// The closed set of primitive shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
}

impl Hittable for Shape {
    fn distance(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Plane(plane) => plane.distance(ray),
            Shape::Sphere(sphere) => sphere.distance(ray),
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Plane(plane) => plane.normal_at(point),
            Shape::Sphere(sphere) => sphere.normal_at(point),
        }
    }
}

/// A primitive together with the surface it exclusively owns.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    shape: Shape,
    surface: Surface,
}

impl WorldObject {
    pub fn new(shape: Shape, surface: Surface) -> Self {
        Self { shape, surface }
    }

    /// Create a plane object.
    pub fn plane(point: Vec3, normal: Vec3, surface: Surface) -> Self {
        Self::new(Shape::Plane(Plane::new(point, normal)), surface)
    }

    /// Create a sphere object.
    pub fn sphere(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self::new(Shape::Sphere(Sphere::new(center, radius)), surface)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

impl Hittable for WorldObject {
    fn distance(&self, ray: &Ray) -> Option<f32> {
        self.shape.distance(ray)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.shape.normal_at(point)
    }
}
