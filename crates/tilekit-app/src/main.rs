//! tilekit demo entry point.
//!
//! Builds a small dashboard-style scene, simulates a couple of window
//! resizes through the input handler and renders a fixed number of frames
//! with a renderer that logs its draw calls instead of touching a GPU.

mod demo;
mod render;

use std::sync::Arc;

use anyhow::Result;

use render::LogRenderer;
use tilekit_scene::{InputHandler, Scene};
use tilekit_types::config::SceneConfig;
use tilekit_types::input::InputEvent;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg or TILEKIT_CONFIG env var, else defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TILEKIT_CONFIG").ok())
    {
        Some(path) => SceneConfig::load(&path)?,
        None => SceneConfig::default(),
    };
    log::info!(
        "Starting {} ({}x{}, {} frames)",
        config.title,
        config.width,
        config.height,
        config.frames,
    );

    let scene = Arc::new(Scene::with_config(&config));
    let mut input = InputHandler::new();
    scene.init(config.width, config.height, Some(&mut input))?;
    scene.edit_background(demo::populate);

    let mut renderer = LogRenderer::default();
    let (mut width, mut height) = (config.width, config.height);
    for frame in 0..config.frames {
        // Every other frame the "window" grows by a quarter.
        if frame % 2 == 1 {
            width += width / 4;
            height += height / 4;
            input.dispatch(&InputEvent::WindowResize { width, height });
        }
        scene.render(&mut renderer, width, height)?;
    }

    scene.shutdown(&mut renderer)?;
    log::info!("Rendered {} frames", renderer.frames());
    Ok(())
}
