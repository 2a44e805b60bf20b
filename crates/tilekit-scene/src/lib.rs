//! tilekit-scene: the top-level tile registry.
//!
//! A [`Scene`] owns the tile tree (a root group whose first child is a
//! background frame sized to the viewport) and the flattened, depth-ordered
//! render set rebuilt on every update. Renderers only ever see complete
//! snapshots of that set.

pub mod input;
pub mod scene;

#[cfg(test)]
pub(crate) mod test_utils;

pub use input::InputHandler;
pub use scene::Scene;
