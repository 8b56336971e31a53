//! Example: Load and inspect a scene description.
//!
//! Run with: cargo run --example inspect_scene -- assets/demo_scene.json

use std::env;

use glint_core::{load_scene, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- assets/demo_scene.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let world = scene.build_world();

            println!("\n=== Scene: {} ===", scene.name);
            println!("Objects: {}", world.object_count());
            println!("Lights: {}", world.light_count());
            println!(
                "Camera: origin {} pitch {:.3} yaw {:.3} viewport {:.3}",
                scene.camera.origin,
                scene.camera.horizontal,
                scene.camera.vertical,
                scene.camera.viewport
            );

            println!("\n--- Objects ---");
            for (index, object) in world.objects().iter().enumerate() {
                let surface = object.surface();
                match object.shape() {
                    Shape::Plane(plane) => println!(
                        "  [{}] plane through {} normal {} - {:?} mirror {}",
                        index,
                        plane.point(),
                        plane.normal(),
                        surface.kind,
                        surface.mirror
                    ),
                    Shape::Sphere(sphere) => println!(
                        "  [{}] sphere at {} radius {} - {:?} mirror {}",
                        index,
                        sphere.center(),
                        sphere.radius(),
                        surface.kind,
                        surface.mirror
                    ),
                }
            }

            println!("\n--- Lights ---");
            for light in world.lights() {
                println!("  {:?} at {}", light.color, light.position);
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
