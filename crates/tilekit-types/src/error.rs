//! Error types for tilekit.

use std::io;

/// Errors produced by the tilekit framework.
#[derive(Debug, thiserror::Error)]
pub enum TileError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TileError>;
