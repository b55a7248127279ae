//! Script configuration model
//!
//! A `TerminalSpec` describes one decorative terminal: where it sits on
//! screen, what its title bar says, and the `Script` it replays forever.
//! Everything here is immutable after construction - the sequencer owns
//! all transient animation state.

mod loader;
pub mod presets;

pub use loader::{load_script_file, ScriptFile, TerminalEntry};

use serde::Deserialize;

/// Default dwell time on a command's output before advancing (ms).
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// One typed input line plus the output it reveals.
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    /// The command line that gets typed character by character
    pub input: String,
    /// Output lines revealed after typing completes
    #[serde(default)]
    pub output: Vec<String>,
    /// How long the output stays on screen before advancing (ms)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Wipe the typed line and output when advancing past this command
    #[serde(default)]
    pub clear: bool,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Command {
    /// Create a command with default timing and no output.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: Vec::new(),
            delay_ms: DEFAULT_DELAY_MS,
            clear: false,
        }
    }

    /// Builder-style: set the output lines.
    pub fn output(mut self, lines: &[&str]) -> Self {
        self.output = lines.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builder-style: set the post-output dwell time.
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Builder-style: clear the window when advancing past this command.
    pub fn clear(mut self) -> Self {
        self.clear = true;
        self
    }

    /// Length of the input line in characters (not bytes).
    pub fn input_chars(&self) -> usize {
        self.input.chars().count()
    }
}

/// The ordered, looping list of commands driving one terminal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// An empty script renders nothing and never animates.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Which screen corner a terminal window is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Window placement relative to an anchor corner.
///
/// Offsets are percentages of the screen area, measured from the anchor
/// corner inward (so `y = 20` on a bottom anchor means 20% up from the
/// bottom edge).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    pub anchor: Anchor,
    /// Horizontal offset from the anchor edge, percent of screen width
    #[serde(default)]
    pub x: u16,
    /// Vertical offset from the anchor edge, percent of screen height
    #[serde(default)]
    pub y: u16,
}

impl Position {
    pub fn new(anchor: Anchor, x: u16, y: u16) -> Self {
        Self { anchor, x, y }
    }
}

/// One configured decorative terminal: identity, placement, chrome, script.
#[derive(Debug, Clone)]
pub struct TerminalSpec {
    /// Stable identifier, used for ordering and logging
    pub id: u32,
    pub position: Position,
    /// Header label, also used as the prompt prefix (e.g. `user@host:~$`)
    pub title: String,
    pub script: Script,
}

impl TerminalSpec {
    pub fn new(id: u32, position: Position, title: impl Into<String>, script: Script) -> Self {
        Self {
            id,
            position,
            title: title.into(),
            script,
        }
    }
}
