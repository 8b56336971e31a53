use anyhow::{bail, Context, Result};
use glint_core::{demo_scene, load_scene, SceneDescription};
use glint_renderer::{RefineState, RenderConfig, RenderContext};
use std::path::PathBuf;
use std::time::Instant;

/// Command line options
#[derive(Debug, PartialEq)]
struct Options {
    scene: Option<PathBuf>,
    output: PathBuf,
    config: RenderConfig,
}

const USAGE: &str = "Usage: glint_viewer [scene.json|demo] [output.png] [WIDTHxHEIGHT]";

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        scene: None,
        output: PathBuf::from("render.png"),
        config: RenderConfig::default(),
    };

    let mut positional = args.iter();
    if let Some(scene) = positional.next() {
        if scene == "-h" || scene == "--help" {
            bail!("{}", USAGE);
        }
        if scene != "demo" {
            options.scene = Some(PathBuf::from(scene));
        }
    }
    if let Some(output) = positional.next() {
        options.output = PathBuf::from(output);
    }
    if let Some(resolution) = positional.next() {
        let (width, height) = parse_resolution(resolution)
            .with_context(|| format!("Invalid resolution '{}'\n{}", resolution, USAGE))?;
        options.config = options.config.with_resolution(width, height);
    }
    if positional.next().is_some() {
        bail!("Too many arguments\n{}", USAGE);
    }

    Ok(options)
}

fn parse_resolution(text: &str) -> Result<(u32, u32)> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .context("expected WIDTHxHEIGHT")?;
    let width: u32 = w.trim().parse().context("width is not a number")?;
    let height: u32 = h.trim().parse().context("height is not a number")?;
    if width == 0 || height == 0 {
        bail!("resolution must be at least 1x1");
    }
    Ok((width, height))
}

fn load(options: &Options) -> Result<SceneDescription> {
    match &options.scene {
        Some(path) => {
            load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))
        }
        None => {
            log::info!("No scene file given, using the built-in demo scene");
            Ok(demo_scene())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Glint Viewer");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    let scene = load(&options)?;
    let config = &options.config;

    let mut context = RenderContext::from_scene(&scene, config.width, config.height);

    let start = Instant::now();
    let mut current_tile = None;
    let mut steps = 0;
    loop {
        if let RefineState::Sizing { tile_size, .. } = context.refine_state() {
            if current_tile != Some(tile_size) {
                log::info!("Refining {}px tiles ({:?} elapsed)", tile_size, start.elapsed());
                current_tile = Some(tile_size);
            }
        }

        let ran = context.step_batch(config.batch_size);
        if ran == 0 {
            break;
        }
        steps += ran;
    }

    log::info!("Rendered {} steps in {:?}", steps, start.elapsed());

    context
        .canvas()
        .save(&options.output)
        .with_context(|| format!("Failed to save {}", options.output.display()))?;
    log::info!("Saved to {}", options.output.display());

    Ok(())
}
