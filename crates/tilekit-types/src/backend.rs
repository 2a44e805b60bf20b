//! Renderer trait and the snapshot types handed to it.
//!
//! The scene never draws anything itself. Once per frame it hands the
//! renderer a depth-ordered slice of [`RenderTile`]s; the renderer owns all
//! GPU state and makes no layout decisions.

use glam::{Mat4, Vec3};

use crate::color::Gradient;
use crate::error::Result;

/// Highest depth value a tile may take. Depths run `0..=MAX_DEPTH`.
pub const MAX_DEPTH: i32 = 99;

/// Opaque handle to a loaded texture in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Resolved, immutable view of one visible tile.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTile {
    /// Center x-coordinate (pixels, left-to-right).
    pub x: i32,
    /// Center y-coordinate (pixels, bottom-to-top).
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Rotation in degrees, anti-clockwise.
    pub angle: i32,
    pub depth: i32,
    /// Pre-order position of the tile in its scene tree. Breaks depth ties.
    pub sequence: usize,
    pub gradient: Gradient,
    pub texture: Option<TextureId>,
    /// Model matrix mapping the unit quad onto the tile.
    pub transform: Mat4,
}

/// Model matrix for a unit quad centered on the origin.
///
/// Scales to `width x height`, rotates by `angle` degrees anti-clockwise,
/// then translates to `(x, y)` with a z-value derived from `depth` so that
/// deeper tiles sit closer to the viewer.
pub fn tile_transform(x: i32, y: i32, width: i32, height: i32, angle: i32, depth: i32) -> Mat4 {
    let z = 1.0 - (depth + 1) as f32 / (MAX_DEPTH + 1) as f32;
    Mat4::from_translation(Vec3::new(x as f32, y as f32, z))
        * Mat4::from_rotation_z((angle as f32).to_radians())
        * Mat4::from_scale(Vec3::new(width as f32, height as f32, 1.0))
}

/// View matrix mapping pixel space onto normalized device coordinates for a
/// viewport centered on the origin.
pub fn view_matrix(width: u32, height: u32) -> Mat4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Mat4::from_scale(Vec3::new(2.0 / w, 2.0 / h, 1.0))
}

/// Rendering collaborator.
///
/// Implementations draw every tile in the order given; the slice is already
/// sorted back-to-front and filtered to visible tiles.
pub trait TileRenderer {
    /// Draw one frame.
    fn render(&mut self, tiles: &[RenderTile], width: u32, height: u32) -> Result<()>;

    /// Release renderer resources. Called once when the scene shuts down.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
