//! Core ray tracer.
//!
//! Implements Whitted-style shading with:
//! - Nearest-hit search over a flat object list
//! - Ambient, diffuse and Blinn-Phong specular terms per point light
//! - Recursive mirror reflection with a hard depth cutoff

use glint_core::{Hittable, Surface, World};
use glint_math::{Color, Interval, Ray, Vec3};

/// The nearest accepted intersection of a ray with the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the object in the world's registry
    pub index: usize,
    /// Distance along the ray
    pub distance: f32,
}

/// Counters accumulated while shading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of shading evaluations, including depth cutoffs and misses
    pub evaluations: u64,
    /// Deepest recursion level evaluated
    pub deepest: u32,
    /// Rays cast from lights for the shadow test
    pub shadow_rays: u64,
}

impl TraceStats {
    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &TraceStats) {
        self.evaluations += other.evaluations;
        self.deepest = self.deepest.max(other.deepest);
        self.shadow_rays += other.shadow_rays;
    }
}

/// Find the nearest object hit by `ray`.
///
/// Distances at or below the world's `min_cast_distance` are ignored so that
/// rays starting on a surface do not hit it again. On equal distances the
/// object registered first wins.
pub fn cast_ray(world: &World, ray: &Ray) -> Option<Hit> {
    let accepted = Interval::beyond(world.settings().min_cast_distance);
    let mut nearest: Option<Hit> = None;

    for (index, object) in world.objects().iter().enumerate() {
        let Some(distance) = object.distance(ray) else {
            continue;
        };
        if !accepted.surrounds(distance) {
            continue;
        }
        if nearest.map_or(true, |hit| distance < hit.distance) {
            nearest = Some(Hit { index, distance });
        }
    }

    nearest
}

/// Compute the color seen along a primary ray.
pub fn color_for_ray(world: &World, ray: &Ray) -> Color {
    let mut stats = TraceStats::default();
    ray_color(world, ray, 0, &mut stats)
}

/// Compute the color seen by a ray at the given reflection depth.
///
/// Rays deeper than the world's `max_depth` return the void color without
/// being cast, which bounds the recursion through facing mirrors.
pub fn ray_color(world: &World, ray: &Ray, depth: u32, stats: &mut TraceStats) -> Color {
    stats.evaluations += 1;
    stats.deepest = stats.deepest.max(depth);

    let settings = world.settings();
    if depth > settings.max_depth {
        return settings.void_color;
    }

    let Some(hit) = cast_ray(world, ray) else {
        return settings.void_color;
    };

    let object = &world.objects()[hit.index];
    let point = ray.at(hit.distance);
    let normal = object.normal_at(point);
    let surface = object.surface();

    let light_color = illumination(world, ray, hit.index, point, normal, surface, stats);

    let base = surface.color_at(point);
    let surface_color = if surface.is_reflective() {
        match Ray::try_new(point, reflect(ray.direction(), normal)) {
            Some(reflected) => {
                let mirrored = ray_color(world, &reflected, depth + 1, stats);
                base * (1.0 - surface.mirror) + mirrored * surface.mirror
            }
            None => base,
        }
    } else {
        base
    };

    surface_color.min(light_color)
}

/// Light arriving at `point`: ambient plus diffuse and specular from every
/// light whose ray reaches `hit_index` first.
///
/// The shadow test only compares object identity: a light counts when the
/// first object its ray meets is the shaded one, wherever on that object
/// the ray lands.
fn illumination(
    world: &World,
    ray: &Ray,
    hit_index: usize,
    point: Vec3,
    normal: Vec3,
    surface: &Surface,
    stats: &mut TraceStats,
) -> Color {
    let mut light_color = world.settings().ambient_color * surface.ambient;

    for light in world.lights() {
        let Some(light_ray) = Ray::try_new(light.position, point - light.position) else {
            continue;
        };
        stats.shadow_rays += 1;

        match cast_ray(world, &light_ray) {
            Some(hit) if hit.index == hit_index => {}
            _ => continue,
        }

        let light_dir = light_ray.direction();

        let diffusion = (-normal.dot(light_dir)).max(0.0);
        light_color += light.color * (surface.diffuse * diffusion);

        if let Some(bisector) = (ray.direction() + light_dir).try_normalize() {
            let specular = (-normal.dot(bisector)).max(0.0).powi(surface.phong_exponent);
            light_color += light.color * (surface.specular * specular);
        }
    }

    light_color
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Light, WorldObject, WorldSettings};

    fn assert_color_eq(a: Color, b: Color) {
        let d = (a.r - b.r).abs() + (a.g - b.g).abs() + (a.b - b.b).abs();
        assert!(d < 1e-4, "{:?} != {:?}", a, b);
    }

    fn unit_sphere_world(surface: Surface) -> World {
        let mut world = World::new();
        world.add_object(WorldObject::sphere(Vec3::ZERO, 1.0, surface));
        world
    }

    #[test]
    fn test_empty_world_returns_void() {
        let world = World::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(cast_ray(&world, &ray), None);
        assert_eq!(color_for_ray(&world, &ray), world.settings().void_color);
    }

    #[test]
    fn test_miss_returns_void() {
        let mut world = World::with_settings(WorldSettings {
            void_color: Color::new(0.1, 0.2, 0.3),
            ..Default::default()
        });
        world.add_object(WorldObject::sphere(Vec3::ZERO, 1.0, Surface::default()));

        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::Z);
        assert_eq!(cast_ray(&world, &ray), None);
        assert_eq!(color_for_ray(&world, &ray), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_plane_scenario() {
        let mut world = World::new();
        world.add_object(WorldObject::plane(Vec3::ZERO, Vec3::Y, Surface::default()));

        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = cast_ray(&world, &ray).unwrap();

        assert_eq!(hit.index, 0);
        assert!((hit.distance - 10.0).abs() < 1e-5);
        assert!(ray.at(hit.distance).length() < 1e-5);
    }

    #[test]
    fn test_nearest_object_wins() {
        let mut world = World::new();
        world.add_object(WorldObject::sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, Surface::default()));
        world.add_object(WorldObject::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Surface::default()));

        let hit = cast_ray(&world, &Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let mut world = World::new();
        for _ in 0..3 {
            world.add_object(WorldObject::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Surface::default()));
        }

        let hit = cast_ray(&world, &Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_ray_on_surface_skips_self() {
        let mut world = World::new();
        world.add_object(WorldObject::plane(Vec3::ZERO, Vec3::Y, Surface::default()));

        // Starts exactly on the plane and heads away from it
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(cast_ray(&world, &ray), None);
    }

    #[test]
    fn test_ambient_only() {
        let world = unit_sphere_world(Surface::uniform(Color::new(0.5, 0.5, 0.5)));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        // No lights: the light color is white * 0.3, which caps the base color
        assert_color_eq(color_for_ray(&world, &ray), Color::new(0.3, 0.3, 0.3));
    }

    #[test]
    fn test_lit_head_on() {
        let mut world = unit_sphere_world(Surface::default());
        world.add_light(Light::new(Color::WHITE, Vec3::new(0.0, 0.0, -10.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        // 0.3 ambient + 0.4 diffuse + 0.5 specular saturates, leaving the red base
        assert_color_eq(color_for_ray(&world, &ray), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_diffuse_term() {
        let surface = Surface::uniform(Color::WHITE).with_shading(0.0, 0.5, 0.0);
        let mut world = unit_sphere_world(surface);
        world.add_light(Light::new(Color::WHITE, Vec3::new(0.0, 0.0, -10.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert_color_eq(color_for_ray(&world, &ray), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_occluder_casts_shadow() {
        let mut world = unit_sphere_world(Surface::default());
        world.add_object(WorldObject::sphere(Vec3::new(0.0, 0.0, -7.0), 0.5, Surface::default()));
        world.add_light(Light::new(Color::WHITE, Vec3::new(0.0, 0.0, -10.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        let mut stats = TraceStats::default();
        let color = ray_color(&world, &ray, 0, &mut stats);

        assert_color_eq(color, Color::new(0.3, 0.0, 0.0));
        assert_eq!(stats.shadow_rays, 1);
    }

    #[test]
    fn test_object_behind_light_does_not_shadow() {
        let mut world = unit_sphere_world(Surface::default());
        world.add_object(WorldObject::sphere(Vec3::new(0.0, 0.0, -20.0), 0.5, Surface::default()));
        world.add_light(Light::new(Color::WHITE, Vec3::new(0.0, 0.0, -10.0)));

        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert_color_eq(color_for_ray(&world, &ray), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_mirror_blends_reflection() {
        let mut world = World::new();
        let floor = Surface::uniform(Color::BLACK)
            .with_shading(1.0, 0.0, 0.0)
            .with_mirror(0.5);
        world.add_object(WorldObject::plane(Vec3::ZERO, Vec3::Y, floor));

        // Reflection escapes to the white void
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert_color_eq(color_for_ray(&world, &ray), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_depth_cutoff_between_facing_mirrors() {
        let mut world = World::new();
        let mirror = Surface::uniform(Color::WHITE).with_mirror(1.0);
        world.add_object(WorldObject::plane(Vec3::ZERO, Vec3::Y, mirror.clone()));
        world.add_object(WorldObject::plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, mirror));

        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let mut stats = TraceStats::default();
        let color = ray_color(&world, &ray, 0, &mut stats);

        // Depths 0..=10 shade, depth 11 returns the void color
        assert_eq!(stats.evaluations, 12);
        assert_eq!(stats.deepest, 11);
        assert!(color.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_depth_cutoff_respects_settings() {
        let mut world = World::with_settings(WorldSettings {
            max_depth: 2,
            ..Default::default()
        });
        let mirror = Surface::uniform(Color::WHITE).with_mirror(1.0);
        world.add_object(WorldObject::plane(Vec3::ZERO, Vec3::Y, mirror.clone()));
        world.add_object(WorldObject::plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, mirror));

        let mut stats = TraceStats::default();
        ray_color(&world, &Ray::new(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y), 0, &mut stats);

        assert_eq!(stats.evaluations, 4);
        assert_eq!(stats.deepest, 3);
    }

    #[test]
    fn test_degenerate_ray_sees_void() {
        let world = unit_sphere_world(Surface::default());
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
        assert_eq!(color_for_ray(&world, &ray), Color::WHITE);
    }

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_stats_merge() {
        let mut a = TraceStats {
            evaluations: 3,
            deepest: 1,
            shadow_rays: 2,
        };
        a.merge(&TraceStats {
            evaluations: 4,
            deepest: 5,
            shadow_rays: 1,
        });
        assert_eq!(a, TraceStats { evaluations: 7, deepest: 5, shadow_rays: 3 });
    }
}
