//! Render context: the world, the camera, the refiner and the canvas, driven
//! one block at a time.

use glint_core::{SceneDescription, World};
use glint_math::{Color, Ray, Vec3};

use crate::tracer::{ray_color, TraceStats};
use crate::{Camera, Canvas, Rect, RefineState, Refiner};

/// A painted refinement step.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Regions painted, already clipped to the canvas
    pub rects: Vec<Rect>,
    /// Color they were painted with
    pub color: Color,
}

/// Everything needed to progressively render one view of a world.
///
/// Camera and canvas changes go through this type so that refinement always
/// restarts from the coarsest level afterwards.
pub struct RenderContext {
    world: World,
    camera: Camera,
    refiner: Refiner,
    canvas: Canvas,
    stats: TraceStats,
}

impl RenderContext {
    /// Create a context sized to the camera's canvas.
    pub fn new(world: World, camera: Camera) -> Self {
        let (width, height) = (camera.width(), camera.height());
        Self {
            world,
            camera,
            refiner: Refiner::new(width, height),
            canvas: Canvas::new(width, height),
            stats: TraceStats::default(),
        }
    }

    /// Build the world and camera a scene description asks for.
    pub fn from_scene(scene: &SceneDescription, width: u32, height: u32) -> Self {
        let world = scene.build_world();
        let camera = Camera::from_settings(&scene.camera, width, height);
        log::info!(
            "Render context for '{}': {} objects, {} lights, {}x{}",
            scene.name,
            world.object_count(),
            world.light_count(),
            width,
            height
        );
        Self::new(world, camera)
    }

    /// Shade a single ray against the world.
    pub fn color_for_ray(&self, ray: &Ray) -> Color {
        crate::tracer::color_for_ray(&self.world, ray)
    }

    /// Run one refinement step: cast its ray, paint its quadrants.
    ///
    /// Returns `None` once refinement is complete.
    pub fn next_block(&mut self) -> Option<Block> {
        let step = self.refiner.next_step()?;

        let ray = self.camera.get_ray(step.sample.0, step.sample.1);
        let mut stats = TraceStats::default();
        let color = ray_color(&self.world, &ray, 0, &mut stats);
        self.stats.merge(&stats);

        for rect in &step.rects {
            self.canvas.fill_rect(rect, color);
        }

        if self.refiner.is_done() {
            log::info!(
                "Refinement complete: {} shading evaluations, {} shadow rays, depth {}",
                self.stats.evaluations,
                self.stats.shadow_rays,
                self.stats.deepest
            );
        }

        Some(Block {
            rects: step.rects,
            color,
        })
    }

    /// Run up to `max_steps` steps; returns how many ran.
    pub fn step_batch(&mut self, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && self.next_block().is_some() {
            steps += 1;
        }
        steps
    }

    /// Step until refinement is complete; returns how many steps ran.
    pub fn render_to_completion(&mut self) -> usize {
        let mut steps = 0;
        while self.next_block().is_some() {
            steps += 1;
        }
        steps
    }

    /// Resize the canvas and camera and restart refinement.
    pub fn reset_content(&mut self, width: u32, height: u32) {
        if (width, height) != (self.canvas.width(), self.canvas.height()) {
            self.canvas.resize(width, height);
        }
        self.camera.resize(width, height);
        self.restart();
    }

    /// Move the camera relative to its facing and restart refinement.
    pub fn move_relative(&mut self, dx: f32, dz: f32) {
        self.camera.move_relative(Vec3::new(dx, 0.0, dz));
        self.restart();
    }

    /// Turn the camera and restart refinement.
    pub fn rotate_relative(&mut self, d_horizontal: f32, d_vertical: f32) {
        self.camera.rotate_relative(d_horizontal, d_vertical);
        self.restart();
    }

    /// Restart refinement for the current canvas size.
    ///
    /// The canvas keeps its pixels; the first coarse pass paints over them.
    pub fn restart(&mut self) {
        self.refiner.reset(self.canvas.width(), self.canvas.height());
        self.stats = TraceStats::default();
    }

    pub fn is_done(&self) -> bool {
        self.refiner.is_done()
    }

    pub fn refine_state(&self) -> RefineState {
        self.refiner.state()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn stats(&self) -> &TraceStats {
        &self.stats
    }
}
