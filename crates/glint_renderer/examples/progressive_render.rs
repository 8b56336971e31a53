//! Progressive render example.
//!
//! Renders the demo scene and saves a snapshot after every refinement pass,
//! so the coarse-to-fine sequence can be inspected frame by frame.

use glint_core::demo_scene;
use glint_renderer::{RefineState, RenderContext};

fn main() {
    println!("Glint Progressive Renderer - Example");
    println!("====================================");

    let (width, height) = (300, 200);
    let mut context = RenderContext::from_scene(&demo_scene(), width, height);

    let start = std::time::Instant::now();
    let mut pass = 0;
    let mut current_tile = None;

    while !context.is_done() {
        let tile = match context.refine_state() {
            RefineState::Sizing { tile_size, .. } => tile_size,
            RefineState::Done => break,
        };

        if current_tile.is_some() && current_tile != Some(tile) {
            save_snapshot(&context, pass);
            pass += 1;
        }
        current_tile = Some(tile);

        context.next_block();
    }
    save_snapshot(&context, pass);

    println!("Rendered {}x{} in {:?}", width, height, start.elapsed());
    println!(
        "{} shading evaluations, {} shadow rays",
        context.stats().evaluations,
        context.stats().shadow_rays
    );
}

fn save_snapshot(context: &RenderContext, pass: usize) {
    let filename = format!("pass_{:02}.png", pass);
    match context.canvas().save(&filename) {
        Ok(()) => println!("Saved {}", filename),
        Err(e) => eprintln!("Failed to save {}: {}", filename, e),
    }
}
