//! A renderer that logs draw calls.

use tilekit_types::backend::{RenderTile, TileRenderer, view_matrix};
use tilekit_types::error::Result;

/// Stands in for a GPU renderer: logs one line per frame and one per tile
/// at debug level.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl TileRenderer for LogRenderer {
    fn render(&mut self, tiles: &[RenderTile], width: u32, height: u32) -> Result<()> {
        let view = view_matrix(width, height);
        log::info!(
            "Frame {}: {} tiles at {width}x{height}",
            self.frames,
            tiles.len()
        );
        for tile in tiles {
            let clip = (view * tile.transform).w_axis;
            log::debug!(
                "  depth {:2} #{:<3} {}x{} at ({}, {}) -> clip ({:.3}, {:.3})",
                tile.depth,
                tile.sequence,
                tile.width,
                tile.height,
                tile.x,
                tile.y,
                clip.x,
                clip.y,
            );
        }
        self.frames += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("Renderer released after {} frames", self.frames);
        Ok(())
    }
}
