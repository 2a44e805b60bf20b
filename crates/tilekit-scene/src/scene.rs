//! The scene: a tile tree plus its flattened, depth-ordered render set.
//!
//! Two locks guard a scene. The tree lock covers the root layout and the
//! viewport; the snapshot lock covers the `Arc<[RenderTile]>` handed to
//! renderers. Updates resolve and flatten under the tree lock, then swap
//! the snapshot in one short critical section. Renders clone the `Arc` and
//! draw with no lock held. Locks are always taken tree first.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tilekit_layout::{Fill, Layout, Node, Pending, SceneLink};
use tilekit_types::backend::{RenderTile, TileRenderer};
use tilekit_types::color::{Color, Gradient};
use tilekit_types::config::SceneConfig;
use tilekit_types::error::{Result, TileError};
use tilekit_types::input::InputEvent;

use crate::input::InputHandler;

/// Index of the background frame among the root's children.
const BACKGROUND: usize = 0;

struct SceneTree {
    root: Layout,
    width: u32,
    height: u32,
}

impl SceneTree {
    fn background_mut(&mut self) -> Option<&mut Layout> {
        self.root
            .child_mut(BACKGROUND)
            .and_then(Node::as_layout_mut)
    }

    fn background(&self) -> Option<&Layout> {
        self.root.child(BACKGROUND).and_then(Node::as_layout)
    }

    /// Size the background to the viewport.
    fn fit_background(&mut self) {
        let (width, height) = (pixels(self.width), pixels(self.height));
        if let Some(background) = self.background_mut() {
            background.tile_mut().set_size(width, height).set_position(0, 0);
        }
    }

    /// Every visible tile below the root, stably sorted by depth with ties
    /// kept in tree order.
    fn flatten(&self) -> Vec<RenderTile> {
        let mut tiles: Vec<RenderTile> = self
            .root
            .descendants()
            .into_iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_visible())
            .map(|(sequence, tile)| tile.snapshot(sequence))
            .collect();
        tiles.sort_by_key(|t| (t.depth, t.sequence));
        tiles
    }
}

fn pixels(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Top-level tile registry.
///
/// The root is an invisible group. Its first child is the background
/// frame, sized to the viewport at depth 0; content normally goes inside
/// it through [`edit_background`](Self::edit_background).
pub struct Scene {
    tree: Mutex<SceneTree>,
    tiles: Mutex<Arc<[RenderTile]>>,
    link: SceneLink,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("tiles", &self.tiles().len())
            .finish_non_exhaustive()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// A scene with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&SceneConfig::default())
    }

    /// A scene whose viewport and background color come from `config`.
    pub fn with_config(config: &SceneConfig) -> Self {
        let background = Layout::frame()
            .with_tile(|t| {
                t.with_fill(Fill::Absolute, Fill::Absolute)
                    .with_depth(0)
                    .with_color(config.background)
            });
        let mut root = Layout::group().with_child(background);
        let link = SceneLink::new();
        root.attach(&link);

        let mut tree = SceneTree {
            root,
            width: config.width,
            height: config.height,
        };
        tree.fit_background();
        tree.root.update();
        link.take();
        let tiles: Arc<[RenderTile]> = tree.flatten().into();

        Self {
            tree: Mutex::new(tree),
            tiles: Mutex::new(tiles),
            link,
        }
    }

    /// Bind the scene to a viewport and an input handler.
    ///
    /// The handler is required: without one the scene could never learn
    /// about viewport resizes. On success the background is sized to
    /// `width x height`, the tree is resolved and a resize callback is
    /// registered that holds only a weak reference to the scene.
    pub fn init(
        self: &Arc<Self>,
        width: u32,
        height: u32,
        input: Option<&mut InputHandler>,
    ) -> Result<()> {
        let input = input.ok_or_else(|| {
            TileError::MissingCollaborator("scene requires an input handler".to_string())
        })?;

        let weak: Weak<Self> = Arc::downgrade(self);
        input.register(move |event| {
            if let InputEvent::WindowResize { width, height } = *event {
                if let Some(scene) = weak.upgrade() {
                    scene.resize(width, height);
                }
            }
        });

        log::info!("Scene initialized at {width}x{height}");
        self.resize(width, height);
        Ok(())
    }

    /// Resolve the whole tree and replace the render set.
    pub fn update(&self) {
        let mut tree = lock(&self.tree);
        self.rebuild(&mut tree, true);
    }

    /// Replace the render set from the tree as it stands, without
    /// resolving layout.
    pub fn refresh(&self) {
        let mut tree = lock(&self.tree);
        self.rebuild(&mut tree, false);
    }

    fn rebuild(&self, tree: &mut SceneTree, resolve: bool) {
        if resolve {
            tree.root.update();
        }
        // Resolution writes geometry through internal paths, but anything
        // raised while the tree was locked is covered by this rebuild.
        self.link.take();
        let tiles: Arc<[RenderTile]> = tree.flatten().into();
        log::debug!(
            "Scene {}: {} visible tiles",
            if resolve { "updated" } else { "refreshed" },
            tiles.len()
        );
        *lock(&self.tiles) = tiles;
    }

    /// Run outstanding work flagged by tile setters.
    fn flush(&self, tree: &mut SceneTree) {
        match self.link.pending() {
            Pending::Layout => self.rebuild(tree, true),
            Pending::Paint => self.rebuild(tree, false),
            Pending::None => {},
        }
    }

    /// Link nodes that were assigned into the tree directly during an edit,
    /// then run outstanding work.
    fn settle(&self, tree: &mut SceneTree) {
        let adopted = tree.root.adopt(&self.link);
        if adopted > 0 {
            log::debug!("Linked {adopted} tiles assigned during edit");
            self.link.request_layout();
        }
        self.flush(tree);
    }

    /// Mutate the tree under its lock.
    ///
    /// Afterwards the scene re-resolves if any geometry changed (including
    /// nodes swapped in place), or only re-flattens if the changes were
    /// cosmetic.
    pub fn edit<R>(&self, f: impl FnOnce(&mut Layout) -> R) -> R {
        let mut tree = lock(&self.tree);
        let out = f(&mut tree.root);
        self.settle(&mut tree);
        out
    }

    /// Like [`edit`](Self::edit) but hands out the background frame.
    ///
    /// Returns `None` without calling `f` if the background was removed
    /// from the root.
    pub fn edit_background<R>(&self, f: impl FnOnce(&mut Layout) -> R) -> Option<R> {
        let mut tree = lock(&self.tree);
        let out = tree.background_mut().map(f);
        self.settle(&mut tree);
        out
    }

    /// Hand the current render set to `renderer`.
    ///
    /// Pending edits made outside [`edit`](Self::edit) are flushed first.
    /// No lock is held while the renderer draws.
    pub fn render(
        &self,
        renderer: &mut dyn TileRenderer,
        width: u32,
        height: u32,
    ) -> Result<()> {
        if self.link.pending() != Pending::None {
            let mut tree = lock(&self.tree);
            self.flush(&mut tree);
        }
        let tiles = self.tiles();
        renderer.render(&tiles, width, height)
    }

    /// Resize the background to a new viewport and re-resolve.
    pub fn resize(&self, width: u32, height: u32) {
        let mut tree = lock(&self.tree);
        if (tree.width, tree.height) != (width, height) {
            log::info!(
                "Viewport resized {}x{} -> {width}x{height}",
                tree.width,
                tree.height
            );
        }
        tree.width = width;
        tree.height = height;
        tree.fit_background();
        self.rebuild(&mut tree, true);
    }

    /// Current viewport size.
    pub fn viewport(&self) -> (u32, u32) {
        let tree = lock(&self.tree);
        (tree.width, tree.height)
    }

    /// The current render set.
    pub fn tiles(&self) -> Arc<[RenderTile]> {
        Arc::clone(&lock(&self.tiles))
    }

    /// The background frame's gradient, or transparent if it was removed.
    pub fn background_colour(&self) -> Gradient {
        lock(&self.tree)
            .background()
            .map_or(Gradient::solid(Color::TRANSPARENT), |bg| bg.tile().gradient())
    }

    /// Drop the render set and let the renderer release its resources.
    pub fn shutdown(&self, renderer: &mut dyn TileRenderer) -> Result<()> {
        *lock(&self.tiles) = Arc::from(Vec::new());
        log::info!("Scene shut down");
        renderer.shutdown()
    }
}
