//! tilekit-layout: the tile model and the layout resolution engine.
//!
//! A [`Tile`] is a positioned, sized, styled rectangle. A [`Layout`] is a
//! tile that owns an ordered list of child [`Node`]s and arranges them:
//! a frame stacks children inside its padded interior, horizontal and
//! vertical lists lay them out consecutively and share leftover space by
//! weight. Resolution is recursive and synchronous.
//!
//! Coordinates are integer pixels with the origin at the viewport center,
//! x pointing right and y pointing up. Every tile position is its center.

pub mod fill;
pub mod frame;
pub mod layout;
pub mod link;
pub mod list;
pub mod tile;

pub use fill::{Align, Axis, Fill};
pub use layout::{Layout, LayoutKind, Node};
pub use link::{Pending, SceneLink};
pub use tile::Tile;
