//! Play subcommand handler - runs the screensaver.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use tracing::debug;

use termsaver::script::{load_script_file, presets};
use termsaver::{App, Config};

/// Start the screensaver, optionally with a custom script file and a
/// theme override.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(script: Option<&Path>, theme: Option<&str>) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("termsaver needs a terminal to draw on (stdout is not a TTY)");
    }

    let mut config = Config::load()?;
    if let Some(name) = theme {
        config.theme = name.to_string();
    }

    let terminals = match script {
        Some(path) => {
            debug!(path = %path.display(), "loading script file");
            load_script_file(path)?
        }
        None => presets::default_terminals(),
    };

    App::new(terminals, &config, Instant::now()).run()
}
