//! Foundation types for tilekit.
//!
//! This crate contains the platform-agnostic types shared by all tilekit
//! crates: colors and gradients, the render snapshot handed to renderers,
//! the renderer trait, input events, configuration, and error types.

pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
