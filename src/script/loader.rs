//! TOML script file loading
//!
//! Users can replace the built-in terminals with their own via
//! `termsaver --script my.toml`. Format:
//!
//! ```toml
//! [[terminal]]
//! title = "me@box:~$"
//! position = { anchor = "top-left", x = 5, y = 15 }
//!
//! [[terminal.command]]
//! input = "uname -a"
//! output = ["Linux box 6.1.0 x86_64 GNU/Linux"]
//! delay_ms = 2000
//! clear = true
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::{Anchor, Command, Position, Script, TerminalSpec};
use crate::error::ScriptError;

/// Top-level structure of a script file.
#[derive(Debug, Deserialize)]
pub struct ScriptFile {
    #[serde(default, rename = "terminal")]
    pub terminals: Vec<TerminalEntry>,
}

/// One `[[terminal]]` table in a script file.
#[derive(Debug, Deserialize)]
pub struct TerminalEntry {
    pub title: String,
    #[serde(default = "default_position")]
    pub position: Position,
    #[serde(default, rename = "command")]
    pub commands: Vec<Command>,
}

fn default_position() -> Position {
    Position::new(Anchor::TopLeft, 5, 10)
}

/// Load and validate a script file.
///
/// Terminals with no commands are skipped with a warning rather than
/// failing the whole file; an entirely empty file is an error.
pub fn load_script_file(path: &Path) -> Result<Vec<TerminalSpec>, ScriptError> {
    if !path.exists() {
        return Err(ScriptError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let file: ScriptFile = toml::from_str(&content)?;

    let mut specs = Vec::with_capacity(file.terminals.len());
    for (idx, entry) in file.terminals.into_iter().enumerate() {
        if entry.commands.is_empty() {
            warn!(title = %entry.title, "skipping terminal with empty command list");
            continue;
        }
        specs.push(TerminalSpec::new(
            idx as u32 + 1,
            entry.position,
            entry.title,
            Script::new(entry.commands),
        ));
    }

    if specs.is_empty() {
        return Err(ScriptError::NoTerminals);
    }

    Ok(specs)
}
