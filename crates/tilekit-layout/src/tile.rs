//! The atomic visual unit.

use glam::Mat4;
use tilekit_types::backend::{MAX_DEPTH, RenderTile, TextureId, tile_transform};
use tilekit_types::color::{Color, Gradient};

use crate::fill::{Align, Axis, Fill};
use crate::link::SceneLink;

/// Default depth for plain tiles, mid-way through the depth range.
pub const DEFAULT_DEPTH: i32 = 50;

/// A rectangular, positioned, styled element.
///
/// Positions are centers. Setters come in two forms: `with_*` consumes and
/// returns the tile for construction, `set_*` mutates in place and returns
/// `&mut Self` for chaining. Geometry setters schedule a re-layout of the
/// attached scene; cosmetic setters (color, texture, visibility, angle)
/// only schedule a repaint.
///
/// Clones are detached: a copy never reports changes to the scene its
/// original belongs to.
#[derive(Debug)]
pub struct Tile {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    h_fill: Fill,
    v_fill: Fill,
    h_weight: u32,
    v_weight: u32,
    aspect_ratio: f32,
    angle: i32,
    depth: i32,
    align: Align,
    gradient: Gradient,
    texture: Option<TextureId>,
    visible: bool,
    link: Option<SceneLink>,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            h_fill: Fill::Absolute,
            v_fill: Fill::Absolute,
            h_weight: 1,
            v_weight: 1,
            aspect_ratio: 1.0,
            angle: 0,
            depth: DEFAULT_DEPTH,
            align: Align::Center,
            gradient: Gradient::solid(Color::SEABROOK),
            texture: None,
            visible: true,
            link: None,
        }
    }
}

impl Clone for Tile {
    fn clone(&self) -> Self {
        Self {
            link: None,
            ..*self
        }
    }
}

impl Tile {
    /// A 100x100 tile at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tile with the given center and size.
    pub fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new().with_position(x, y).with_size(width, height)
    }

    // -- Getters ----------------------------------------------------------

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn h_fill(&self) -> Fill {
        self.h_fill
    }

    pub fn v_fill(&self) -> Fill {
        self.v_fill
    }

    pub fn h_weight(&self) -> u32 {
        self.h_weight
    }

    pub fn v_weight(&self) -> u32 {
        self.v_weight
    }

    /// Width:height ratio used by the aspect fill modes.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Rotation in degrees, anti-clockwise.
    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the tile is attached to a scene.
    pub fn is_attached(&self) -> bool {
        self.link.is_some()
    }

    pub fn center(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn size(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn fill(&self, axis: Axis) -> Fill {
        match axis {
            Axis::Horizontal => self.h_fill,
            Axis::Vertical => self.v_fill,
        }
    }

    pub fn weight(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.h_weight,
            Axis::Vertical => self.v_weight,
        }
    }

    /// Lower edge along `axis`. `max(axis) - min(axis)` always equals the
    /// size, odd and negative sizes included.
    pub fn min(&self, axis: Axis) -> i32 {
        self.center(axis) - self.size(axis) / 2
    }

    /// Upper edge along `axis`.
    pub fn max(&self, axis: Axis) -> i32 {
        self.min(axis) + self.size(axis)
    }

    /// Left edge.
    pub fn min_x(&self) -> i32 {
        self.min(Axis::Horizontal)
    }

    /// Right edge.
    pub fn max_x(&self) -> i32 {
        self.max(Axis::Horizontal)
    }

    /// Bottom edge.
    pub fn min_y(&self) -> i32 {
        self.min(Axis::Vertical)
    }

    /// Top edge.
    pub fn max_y(&self) -> i32 {
        self.max(Axis::Vertical)
    }

    /// Inclusive axis-aligned containment test.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.min_x() && px <= self.max_x() && py >= self.min_y() && py <= self.max_y()
    }

    /// Whether either axis derives its size from children.
    pub fn wraps_content(&self) -> bool {
        self.h_fill.is_wrap() || self.v_fill.is_wrap()
    }

    /// Model matrix for the renderer.
    pub fn transform(&self) -> Mat4 {
        tile_transform(
            self.x,
            self.y,
            self.width,
            self.height,
            self.angle,
            self.depth,
        )
    }

    /// Resolved view of this tile for the renderer.
    pub fn snapshot(&self, sequence: usize) -> RenderTile {
        RenderTile {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            angle: self.angle,
            depth: self.depth,
            sequence,
            gradient: self.gradient,
            texture: self.texture,
            transform: self.transform(),
        }
    }

    // -- In-place setters -------------------------------------------------

    pub fn set_x(&mut self, x: i32) -> &mut Self {
        self.x = x;
        self.relayout()
    }

    pub fn set_y(&mut self, y: i32) -> &mut Self {
        self.y = y;
        self.relayout()
    }

    pub fn set_position(&mut self, x: i32, y: i32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.relayout()
    }

    pub fn set_width(&mut self, width: i32) -> &mut Self {
        self.width = width;
        self.relayout()
    }

    pub fn set_height(&mut self, height: i32) -> &mut Self {
        self.height = height;
        self.relayout()
    }

    pub fn set_size(&mut self, width: i32, height: i32) -> &mut Self {
        self.width = width;
        self.height = height;
        self.relayout()
    }

    pub fn set_fill(&mut self, h_fill: Fill, v_fill: Fill) -> &mut Self {
        self.h_fill = h_fill;
        self.v_fill = v_fill;
        self.relayout()
    }

    pub fn set_h_fill(&mut self, fill: Fill) -> &mut Self {
        self.h_fill = fill;
        self.relayout()
    }

    pub fn set_v_fill(&mut self, fill: Fill) -> &mut Self {
        self.v_fill = fill;
        self.relayout()
    }

    pub fn set_weights(&mut self, h_weight: u32, v_weight: u32) -> &mut Self {
        self.h_weight = h_weight;
        self.v_weight = v_weight;
        self.relayout()
    }

    pub fn set_h_weight(&mut self, weight: u32) -> &mut Self {
        self.h_weight = weight;
        self.relayout()
    }

    pub fn set_v_weight(&mut self, weight: u32) -> &mut Self {
        self.v_weight = weight;
        self.relayout()
    }

    /// Set the width:height ratio. Non-positive or non-finite ratios are
    /// ignored.
    pub fn set_aspect_ratio(&mut self, ratio: f32) -> &mut Self {
        if !(ratio.is_finite() && ratio > 0.0) {
            log::warn!("Ignoring invalid aspect ratio {ratio}");
            return self;
        }
        self.aspect_ratio = ratio;
        self.relayout()
    }

    pub fn set_align(&mut self, align: Align) -> &mut Self {
        self.align = align;
        self.relayout()
    }

    /// Set the draw-order depth, clamped to `0..=99`.
    pub fn set_depth(&mut self, depth: i32) -> &mut Self {
        self.depth = depth.clamp(0, MAX_DEPTH);
        self.relayout()
    }

    pub fn set_angle(&mut self, angle: i32) -> &mut Self {
        self.angle = angle;
        self.repaint()
    }

    pub fn set_color(&mut self, color: impl Into<Gradient>) -> &mut Self {
        self.gradient = color.into();
        self.repaint()
    }

    pub fn set_texture(&mut self, texture: Option<TextureId>) -> &mut Self {
        self.texture = texture;
        self.repaint()
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self.repaint()
    }

    // -- Builders ---------------------------------------------------------

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.set_position(x, y);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.set_size(width, height);
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.set_height(height);
        self
    }

    pub fn with_fill(mut self, h_fill: Fill, v_fill: Fill) -> Self {
        self.set_fill(h_fill, v_fill);
        self
    }

    pub fn with_h_fill(mut self, fill: Fill) -> Self {
        self.set_h_fill(fill);
        self
    }

    pub fn with_v_fill(mut self, fill: Fill) -> Self {
        self.set_v_fill(fill);
        self
    }

    pub fn with_weights(mut self, h_weight: u32, v_weight: u32) -> Self {
        self.set_weights(h_weight, v_weight);
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.set_aspect_ratio(ratio);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.set_align(align);
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.set_depth(depth);
        self
    }

    pub fn with_angle(mut self, angle: i32) -> Self {
        self.set_angle(angle);
        self
    }

    pub fn with_color(mut self, color: impl Into<Gradient>) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.set_texture(Some(texture));
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.set_visible(visible);
        self
    }

    // -- Layout-internal writers (no invalidation) ------------------------

    pub(crate) fn assign_size(&mut self, axis: Axis, size: i32) {
        match axis {
            Axis::Horizontal => self.width = size,
            Axis::Vertical => self.height = size,
        }
    }

    pub(crate) fn assign_center(&mut self, axis: Axis, center: i32) {
        match axis {
            Axis::Horizontal => self.x = center,
            Axis::Vertical => self.y = center,
        }
    }

    /// Shrink to the largest size with the locked ratio that fits inside
    /// the current size.
    pub(crate) fn fit_aspect(&mut self) {
        let (w, h) = self.aspect_candidates();
        self.width = self.width.min(w);
        self.height = self.height.min(h);
    }

    /// Grow to the smallest size with the locked ratio that covers the
    /// current size.
    pub(crate) fn cover_aspect(&mut self) {
        let (w, h) = self.aspect_candidates();
        self.width = self.width.max(w);
        self.height = self.height.max(h);
    }

    /// Width implied by the height and height implied by the width.
    fn aspect_candidates(&self) -> (i32, i32) {
        let r = self.aspect_ratio;
        (
            (self.height as f32 * r).round() as i32,
            (self.width as f32 / r).round() as i32,
        )
    }

    pub(crate) fn link(&self) -> Option<&SceneLink> {
        self.link.as_ref()
    }

    pub(crate) fn attach(&mut self, link: &SceneLink) {
        self.link = Some(link.clone());
    }

    pub(crate) fn detach(&mut self) {
        self.link = None;
    }

    /// Attach to `link` unless already attached to that scene. Returns
    /// whether the link changed.
    pub(crate) fn adopt(&mut self, link: &SceneLink) -> bool {
        if self.link.as_ref().is_some_and(|l| l.same_scene(link)) {
            return false;
        }
        self.attach(link);
        true
    }

    fn relayout(&mut self) -> &mut Self {
        if let Some(link) = &self.link {
            link.request_layout();
        }
        self
    }

    fn repaint(&mut self) -> &mut Self {
        if let Some(link) = &self.link {
            link.request_paint();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Pending;

    #[test]
    fn defaults() {
        let t = Tile::new();
        assert_eq!((t.width(), t.height()), (100, 100));
        assert_eq!((t.h_fill(), t.v_fill()), (Fill::Absolute, Fill::Absolute));
        assert_eq!(t.align(), Align::Center);
        assert_eq!(t.depth(), 50);
        assert!(t.is_visible());
        assert!(!t.is_attached());
    }

    #[test]
    fn edges_from_center() {
        let t = Tile::rect(10, 20, 40, 30);
        assert_eq!((t.min_x(), t.max_x()), (-10, 30));
        assert_eq!((t.min_y(), t.max_y()), (5, 35));
    }

    #[test]
    fn odd_size_edges_span_full_width() {
        let t = Tile::rect(0, 0, 5, 7);
        assert_eq!(t.max_x() - t.min_x(), 5);
        assert_eq!(t.max_y() - t.min_y(), 7);
    }

    #[test]
    fn negative_size_edges_span_full_width() {
        let t = Tile::rect(3, 0, -9, 0);
        assert_eq!(t.max_x() - t.min_x(), -9);
    }

    #[test]
    fn contains_is_inclusive() {
        let t = Tile::rect(0, 0, 20, 10);
        assert!(t.contains(0, 0));
        assert!(t.contains(-10, 5));
        assert!(t.contains(10, -5));
        assert!(!t.contains(11, 0));
        assert!(!t.contains(0, -6));
    }

    #[test]
    fn depth_is_clamped() {
        assert_eq!(Tile::new().with_depth(500).depth(), 99);
        assert_eq!(Tile::new().with_depth(-3).depth(), 0);
    }

    #[test]
    fn invalid_aspect_ratio_ignored() {
        let t = Tile::new().with_aspect_ratio(2.0).with_aspect_ratio(0.0);
        assert_eq!(t.aspect_ratio(), 2.0);
        let t = t.with_aspect_ratio(f32::NAN);
        assert_eq!(t.aspect_ratio(), 2.0);
    }

    #[test]
    fn chained_setters() {
        let mut t = Tile::new();
        t.set_size(10, 20).set_position(1, 2).set_visible(false);
        assert_eq!((t.width(), t.height(), t.x(), t.y()), (10, 20, 1, 2));
        assert!(!t.is_visible());
    }

    #[test]
    fn geometry_setter_requests_layout() {
        let link = SceneLink::new();
        let mut t = Tile::new();
        t.attach(&link);
        t.set_width(30);
        assert_eq!(link.take(), Pending::Layout);
        t.set_depth(3);
        assert_eq!(link.take(), Pending::Layout);
    }

    #[test]
    fn cosmetic_setter_requests_paint_only() {
        let link = SceneLink::new();
        let mut t = Tile::new();
        t.attach(&link);
        t.set_color(Color::WHITE).set_angle(45).set_visible(false);
        assert_eq!(link.take(), Pending::Paint);
    }

    #[test]
    fn detached_tile_raises_nothing() {
        let link = SceneLink::new();
        let mut t = Tile::new();
        t.attach(&link);
        t.detach();
        t.set_width(1);
        assert_eq!(link.take(), Pending::None);
    }

    #[test]
    fn clone_is_detached() {
        let link = SceneLink::new();
        let mut t = Tile::new().with_size(30, 40).with_depth(7);
        t.attach(&link);
        let mut copy = t.clone();
        assert!(t.is_attached());
        assert!(!copy.is_attached());
        assert_eq!((copy.width(), copy.height(), copy.depth()), (30, 40, 7));
        copy.set_width(1);
        assert_eq!(link.take(), Pending::None);
    }

    #[test]
    fn fit_aspect_shrinks_long_side() {
        let mut t = Tile::new().with_size(200, 100).with_aspect_ratio(1.0);
        t.fit_aspect();
        assert_eq!((t.width(), t.height()), (100, 100));
    }

    #[test]
    fn cover_aspect_grows_short_side() {
        let mut t = Tile::new().with_size(200, 100).with_aspect_ratio(1.0);
        t.cover_aspect();
        assert_eq!((t.width(), t.height()), (200, 200));
    }

    #[test]
    fn fit_aspect_wide_ratio() {
        let mut t = Tile::new().with_size(300, 300).with_aspect_ratio(2.0);
        t.fit_aspect();
        assert_eq!((t.width(), t.height()), (300, 150));
    }

    #[test]
    fn snapshot_carries_geometry() {
        let t = Tile::rect(5, 6, 7, 8).with_depth(12).with_angle(30);
        let r = t.snapshot(4);
        assert_eq!((r.x, r.y, r.width, r.height), (5, 6, 7, 8));
        assert_eq!((r.depth, r.angle, r.sequence), (12, 30, 4));
        assert_eq!(r.transform, t.transform());
    }
}
