//! Layouts: tiles that own and arrange child tiles.
//!
//! The shared bookkeeping lives here: child management, scene-link
//! propagation, depth-first flattening, interior bands, alignment and the
//! aspect clamp. The per-kind sizing algorithms live in [`crate::frame`]
//! and [`crate::list`].

use tilekit_types::color::{Color, Gradient};

use crate::fill::{Align, Axis, Fill};
use crate::link::SceneLink;
use crate::tile::Tile;
use crate::{frame, list};

/// How a layout arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// No arrangement; children keep their own geometry and are only
    /// updated recursively.
    Group,
    /// Every child aligned independently inside the padded interior.
    Frame,
    /// Children placed left to right.
    HorizontalList,
    /// Children placed top to bottom.
    VerticalList,
}

/// A child of a layout: either a plain tile or a nested layout.
#[derive(Debug, Clone)]
pub enum Node {
    Tile(Tile),
    Layout(Layout),
}

impl Node {
    pub fn tile(&self) -> &Tile {
        match self {
            Self::Tile(tile) => tile,
            Self::Layout(layout) => &layout.tile,
        }
    }

    pub fn tile_mut(&mut self) -> &mut Tile {
        match self {
            Self::Tile(tile) => tile,
            Self::Layout(layout) => &mut layout.tile,
        }
    }

    pub fn as_layout(&self) -> Option<&Layout> {
        match self {
            Self::Layout(layout) => Some(layout),
            Self::Tile(_) => None,
        }
    }

    pub fn as_layout_mut(&mut self) -> Option<&mut Layout> {
        match self {
            Self::Layout(layout) => Some(layout),
            Self::Tile(_) => None,
        }
    }

    /// Resolve this node. A plain tile has nothing to resolve.
    pub fn update(&mut self) {
        if let Self::Layout(layout) = self {
            layout.update();
        }
    }

    fn attach(&mut self, link: &SceneLink) {
        match self {
            Self::Tile(tile) => tile.attach(link),
            Self::Layout(layout) => layout.attach(link),
        }
    }

    fn detach(&mut self) {
        match self {
            Self::Tile(tile) => tile.detach(),
            Self::Layout(layout) => layout.detach(),
        }
    }

    fn adopt(&mut self, link: &SceneLink) -> usize {
        match self {
            Self::Tile(tile) => usize::from(tile.adopt(link)),
            Self::Layout(layout) => layout.adopt(link),
        }
    }
}

impl From<Tile> for Node {
    fn from(tile: Tile) -> Self {
        Self::Tile(tile)
    }
}

impl From<Layout> for Node {
    fn from(layout: Layout) -> Self {
        Self::Layout(layout)
    }
}

/// A tile that owns an ordered sequence of children and arranges them.
#[derive(Debug, Clone)]
pub struct Layout {
    tile: Tile,
    kind: LayoutKind,
    children: Vec<Node>,
    padding: i32,
    spacing: i32,
}

impl Layout {
    /// Create an empty layout of the given kind with that kind's defaults:
    /// filling its parent on both axes, frames visible at depth 2, every
    /// other kind invisible at depth 1.
    pub fn new(kind: LayoutKind) -> Self {
        let (visible, depth) = match kind {
            LayoutKind::Frame => (true, 2),
            LayoutKind::Group | LayoutKind::HorizontalList | LayoutKind::VerticalList => {
                (false, 1)
            },
        };
        let tile = Tile::new()
            .with_fill(Fill::FillParent, Fill::FillParent)
            .with_visible(visible)
            .with_depth(depth);
        Self {
            tile,
            kind,
            children: Vec::new(),
            padding: 0,
            spacing: 0,
        }
    }

    pub fn group() -> Self {
        Self::new(LayoutKind::Group)
    }

    pub fn frame() -> Self {
        Self::new(LayoutKind::Frame)
    }

    pub fn horizontal_list() -> Self {
        Self::new(LayoutKind::HorizontalList)
    }

    pub fn vertical_list() -> Self {
        Self::new(LayoutKind::VerticalList)
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// The layout's own tile (geometry, fill, appearance).
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn tile_mut(&mut self) -> &mut Tile {
        &mut self.tile
    }

    /// Uniform inset applied to the content area (pixels).
    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Gap between consecutive children of a list (pixels).
    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the children without changing their number or
    /// order.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Mutable access to one child. Prefer [`replace`](Self::replace) for
    /// swapping the node out; a node assigned through this reference is
    /// only linked to the scene once the scene's edit completes.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // -- Child management -------------------------------------------------

    /// Append a child.
    pub fn push(&mut self, child: impl Into<Node>) -> &mut Self {
        let index = self.children.len();
        self.insert(index, child)
    }

    /// Insert a child at `index`, clamped to the end of the list.
    pub fn insert(&mut self, index: usize, child: impl Into<Node>) -> &mut Self {
        let mut child = child.into();
        match self.tile.link() {
            Some(link) => child.attach(link),
            None => child.detach(),
        }
        let index = index.min(self.children.len());
        self.children.insert(index, child);
        self.relayout();
        self
    }

    /// Remove and return the child at `index`. The returned node is
    /// detached from the scene.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index >= self.children.len() {
            return None;
        }
        let mut child = self.children.remove(index);
        child.detach();
        self.relayout();
        Some(child)
    }

    /// Swap the child at `index` for `child` and return the old node,
    /// detached. Returns `None` and leaves the layout untouched when
    /// `index` is out of range.
    pub fn replace(&mut self, index: usize, child: impl Into<Node>) -> Option<Node> {
        if index >= self.children.len() {
            return None;
        }
        let mut child = child.into();
        match self.tile.link() {
            Some(link) => child.attach(link),
            None => child.detach(),
        }
        let mut old = std::mem::replace(&mut self.children[index], child);
        old.detach();
        self.relayout();
        Some(old)
    }

    /// Remove every child.
    pub fn clear(&mut self) -> &mut Self {
        for mut child in self.children.drain(..) {
            child.detach();
        }
        self.relayout();
        self
    }

    pub fn set_padding(&mut self, padding: i32) -> &mut Self {
        self.padding = padding;
        self.relayout();
        self
    }

    pub fn set_spacing(&mut self, spacing: i32) -> &mut Self {
        self.spacing = spacing;
        self.relayout();
        self
    }

    // -- Builders ---------------------------------------------------------

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for child in children {
            self.push(child);
        }
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.set_padding(padding);
        self
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.set_spacing(spacing);
        self
    }

    /// Apply builder calls to the layout's own tile.
    pub fn with_tile(mut self, f: impl FnOnce(Tile) -> Tile) -> Self {
        let link = self.tile.link().cloned();
        self.tile = f(self.tile);
        if let Some(link) = link {
            self.tile.attach(&link);
        }
        self
    }

    pub fn with_size(self, width: i32, height: i32) -> Self {
        self.with_tile(|t| t.with_size(width, height))
    }

    pub fn with_fill(self, h_fill: Fill, v_fill: Fill) -> Self {
        self.with_tile(|t| t.with_fill(h_fill, v_fill))
    }

    pub fn with_align(self, align: Align) -> Self {
        self.with_tile(|t| t.with_align(align))
    }

    pub fn with_depth(self, depth: i32) -> Self {
        self.with_tile(|t| t.with_depth(depth))
    }

    pub fn with_color(self, color: impl Into<Gradient>) -> Self {
        self.with_tile(|t| t.with_color(color))
    }

    pub fn with_visible(self, visible: bool) -> Self {
        self.with_tile(|t| t.with_visible(visible))
    }

    /// Convenience: a solid background color that also makes the layout
    /// visible.
    pub fn with_background(self, color: Color) -> Self {
        self.with_tile(|t| t.with_color(color).with_visible(true))
    }

    // -- Scene link ---------------------------------------------------------

    /// Attach this layout and its whole subtree to a scene.
    pub fn attach(&mut self, link: &SceneLink) {
        self.tile.attach(link);
        for child in &mut self.children {
            child.attach(link);
        }
    }

    /// Detach this layout and its whole subtree from any scene.
    pub fn detach(&mut self) {
        self.tile.detach();
        for child in &mut self.children {
            child.detach();
        }
    }

    /// Attach every tile in this subtree, this layout's own included, that
    /// is not already linked to `link`. Returns how many were attached.
    ///
    /// Scenes run this after each edit so nodes assigned directly through
    /// [`child_mut`](Self::child_mut) or [`children_mut`](Self::children_mut)
    /// still report their changes.
    pub fn adopt(&mut self, link: &SceneLink) -> usize {
        let mut adopted = usize::from(self.tile.adopt(link));
        for child in &mut self.children {
            adopted += child.adopt(link);
        }
        adopted
    }

    fn relayout(&self) {
        if let Some(link) = self.tile.link() {
            link.request_layout();
        }
    }

    // -- Flattening ---------------------------------------------------------

    /// Every tile below this layout in depth-first pre-order: each child
    /// is followed by its own descendants. The layout's own tile is not
    /// included.
    pub fn descendants(&self) -> Vec<&Tile> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Tile>) {
        for child in &self.children {
            out.push(child.tile());
            if let Node::Layout(layout) = child {
                layout.collect_descendants(out);
            }
        }
    }

    // -- Resolution -------------------------------------------------------

    /// Recompute the size and position of every descendant, and this
    /// layout's own size where it wraps its content.
    pub fn update(&mut self) {
        match self.kind {
            LayoutKind::Group => self.update_children(),
            LayoutKind::Frame => frame::resolve(self),
            LayoutKind::HorizontalList => list::resolve(self, Axis::Horizontal),
            LayoutKind::VerticalList => list::resolve(self, Axis::Vertical),
        }
    }

    pub(crate) fn update_children(&mut self) {
        for child in &mut self.children {
            child.update();
        }
    }

    /// Resolve the children whose size is needed before this layout can
    /// size itself: all of them when this layout wraps, otherwise only
    /// those that wrap their own content.
    pub(crate) fn measure_children(&mut self) {
        let wraps = self.tile.wraps_content();
        for child in &mut self.children {
            if wraps || child.tile().wraps_content() {
                child.update();
            }
        }
    }

    /// Padded interior along `axis` as `(lo, hi)`.
    pub(crate) fn interior(&self, axis: Axis) -> (i32, i32) {
        (
            self.tile.min(axis) + self.padding,
            self.tile.max(axis) - self.padding,
        )
    }

    /// Size an axis on which every child may span the whole interior:
    /// wrap to the largest child, or hand `FillParent` children the full
    /// interior.
    pub(crate) fn size_stacked_axis(&mut self, axis: Axis) {
        let pad = 2 * self.padding;
        if self.tile.fill(axis).is_wrap() {
            let largest = self.children.iter().map(|c| c.tile().size(axis)).max();
            let content = largest.unwrap_or_else(|| {
                log::warn!("Wrapping an empty {:?}; using padding only", self.kind);
                0
            });
            self.tile.assign_size(axis, content + pad);
        } else {
            let inner = self.tile.size(axis) - pad;
            for child in &mut self.children {
                if child.tile().fill(axis).is_fill_parent() {
                    child.tile_mut().assign_size(axis, inner);
                }
            }
        }
    }

    /// Honour locked aspect ratios once both axes are sized: this layout
    /// grows to cover its ratio when it wraps, and filling children shrink
    /// to fit theirs.
    pub(crate) fn clamp_aspect(&mut self) {
        if has_fill(&self.tile, Fill::WrapContentAspect) {
            self.tile.cover_aspect();
        }
        for child in &mut self.children {
            if has_fill(child.tile(), Fill::FillParentAspect) {
                child.tile_mut().fit_aspect();
            }
        }
    }

    /// Align every child within the padded interior along `axis`.
    pub(crate) fn place_children(&mut self, axis: Axis) {
        let (lo, hi) = self.interior(axis);
        for child in &mut self.children {
            place(child.tile_mut(), axis, lo, hi);
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::group()
    }
}

fn has_fill(tile: &Tile, fill: Fill) -> bool {
    tile.h_fill() == fill || tile.v_fill() == fill
}

/// Center `tile` within `[lo, hi]` along `axis` using its alignment.
pub(crate) fn place(tile: &mut Tile, axis: Axis, lo: i32, hi: i32) {
    let center = tile.align().place(axis, lo, hi, tile.size(axis));
    tile.assign_center(axis, center);
}
