//! Script loading and validation errors.

use std::path::PathBuf;

/// Errors that can occur while loading a script file.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read script file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid script file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Script file defines no terminals with at least one command")]
    NoTerminals,
}
