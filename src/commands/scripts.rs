//! Scripts subcommand handler - lists the built-in terminals.

use anyhow::Result;

use termsaver::script::presets;
use termsaver::Theme;

/// Print the built-in terminal scripts: title, placement, and commands.
pub fn handle_list() -> Result<()> {
    let theme = Theme::default();

    for terminal in presets::default_terminals() {
        println!("{}", theme.accent_text(&terminal.title));
        println!(
            "{}",
            theme.secondary_text(&format!(
                "  anchor {:?}, {} command(s)",
                terminal.position.anchor,
                terminal.script.len()
            ))
        );
        for cmd in &terminal.script.commands {
            println!("{}", theme.primary_text(&format!("  $ {}", cmd.input)));
        }
        println!();
    }

    Ok(())
}
