//! termsaver - a terminal screensaver
//!
//! Floats decorative fake-terminal windows over the real terminal, each
//! typing out a scripted command session character by character, pausing,
//! revealing canned output, and cycling forever.
//!
//! # Architecture
//!
//! - [`script`]: immutable configuration (commands, scripts, placement),
//!   built-in presets, and the TOML script-file loader
//! - [`sequencer`]: the per-terminal typing state machine, driven by a
//!   single `tick(now)` from the event loop
//! - [`layout`]: responsive visibility breakpoints and anchored window
//!   placement
//! - [`theme`]: colors for window chrome and severity-classified output
//! - [`tui`]: raw-mode terminal guard and the window widget
//! - [`app`]: the event loop tying it all together
//! - [`config`]: the user config file

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod script;
pub mod sequencer;
pub mod theme;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use error::ScriptError;
pub use theme::Theme;
