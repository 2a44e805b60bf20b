//! Back-reference from tiles to the scene that owns them.
//!
//! A tile never owns its scene. It holds a [`SceneLink`]: a shared pair of
//! flags the scene polls after every edit. Geometry changes raise the
//! layout flag, cosmetic changes raise the paint flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
struct Flags {
    layout: AtomicBool,
    paint: AtomicBool,
}

/// Work a scene still owes after tiles were mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Nothing changed.
    None,
    /// Only cosmetic state changed; re-flatten without resolving layout.
    Paint,
    /// Geometry changed; resolve the whole tree.
    Layout,
}

/// Non-owning handle shared between a scene and every tile attached to it.
#[derive(Debug, Clone, Default)]
pub struct SceneLink {
    flags: Arc<Flags>,
}

impl SceneLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a full re-layout.
    pub fn request_layout(&self) {
        self.flags.layout.store(true, Ordering::Release);
    }

    /// Schedule a rebuild of the render set without re-layout.
    pub fn request_paint(&self) {
        self.flags.paint.store(true, Ordering::Release);
    }

    /// Peek at the outstanding work without clearing it.
    pub fn pending(&self) -> Pending {
        if self.flags.layout.load(Ordering::Acquire) {
            Pending::Layout
        } else if self.flags.paint.load(Ordering::Acquire) {
            Pending::Paint
        } else {
            Pending::None
        }
    }

    /// Clear both flags and return the work that was outstanding.
    pub fn take(&self) -> Pending {
        let layout = self.flags.layout.swap(false, Ordering::AcqRel);
        let paint = self.flags.paint.swap(false, Ordering::AcqRel);
        match (layout, paint) {
            (true, _) => Pending::Layout,
            (false, true) => Pending::Paint,
            (false, false) => Pending::None,
        }
    }

    /// Whether both handles point at the same scene.
    pub fn same_scene(&self, other: &SceneLink) -> bool {
        Arc::ptr_eq(&self.flags, &other.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_link_has_nothing_pending() {
        assert_eq!(SceneLink::new().pending(), Pending::None);
    }

    #[test]
    fn layout_outranks_paint() {
        let link = SceneLink::new();
        link.request_paint();
        assert_eq!(link.pending(), Pending::Paint);
        link.request_layout();
        assert_eq!(link.take(), Pending::Layout);
        assert_eq!(link.take(), Pending::None);
    }

    #[test]
    fn clones_share_flags() {
        let link = SceneLink::new();
        let tile_side = link.clone();
        tile_side.request_layout();
        assert_eq!(link.pending(), Pending::Layout);
        assert!(link.same_scene(&tile_side));
        assert!(!link.same_scene(&SceneLink::new()));
    }
}
