//! Shared test utilities for scene tests.
//!
//! Provides a [`MockRenderer`] that records every frame it is handed.

use tilekit_types::backend::{RenderTile, TileRenderer};
use tilekit_types::error::{Result, TileError};

/// One recorded `render` call.
#[derive(Debug, Clone)]
pub struct Frame {
    pub tiles: Vec<RenderTile>,
    pub width: u32,
    pub height: u32,
}

/// A renderer that records all frames for test assertions.
#[derive(Debug, Default)]
pub struct MockRenderer {
    pub frames: Vec<Frame>,
    pub shut_down: bool,
    /// When set, every `render` call fails with this message.
    pub fail_with: Option<String>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame.
    pub fn last(&self) -> &Frame {
        self.frames.last().expect("no frame rendered")
    }

    /// Depths of the most recent frame, in draw order.
    pub fn depths(&self) -> Vec<i32> {
        self.last().tiles.iter().map(|t| t.depth).collect()
    }
}

impl TileRenderer for MockRenderer {
    fn render(&mut self, tiles: &[RenderTile], width: u32, height: u32) -> Result<()> {
        if let Some(msg) = &self.fail_with {
            return Err(TileError::Renderer(msg.clone()));
        }
        self.frames.push(Frame {
            tiles: tiles.to_vec(),
            width,
            height,
        });
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shut_down = true;
        Ok(())
    }
}
