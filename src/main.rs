//! termsaver binary entry point
//!
//! Argument parsing and subcommand dispatch. Running with no subcommand
//! starts the screensaver.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// Version string shown by `--version`.
///
/// Dev builds carry the git SHA and build date; builds with the
/// `release` feature get just the clean version number.
fn long_version() -> String {
    let date = option_env!("TERMSAVER_BUILD_DATE").unwrap_or("unknown");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => {
            let short = &sha[..sha.len().min(7)];
            format!("{} ({} {})", env!("CARGO_PKG_VERSION"), short, date)
        }
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[derive(Parser)]
#[command(
    name = "termsaver",
    about = "Terminal screensaver - floating fake terminals typing out scripted sessions",
    version = long_version()
)]
struct Cli {
    /// Load terminals from a TOML script file instead of the built-ins
    #[arg(long, global = true, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Theme override: ocean, matrix, or classic
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the screensaver (the default when no subcommand is given)
    Play,
    /// List the built-in terminal scripts
    Scripts,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Play) => {
            commands::play::handle_play(cli.script.as_deref(), cli.theme.as_deref())
        }
        Some(Commands::Scripts) => commands::scripts::handle_list(),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "termsaver", &mut io::stdout());
            Ok(())
        }
    }
}
