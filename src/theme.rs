//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the screensaver windows) and ANSI
//! escape codes (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the screensaver.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Typed command text
    pub text_primary: Color,
    /// Window border and dimmed chrome
    pub text_secondary: Color,
    /// Prompt, title bar text, cursor
    pub accent: Color,
    /// `[!]` alert output lines
    pub alert: Color,
    /// `[+]` success output lines
    pub success: Color,
    /// `[*]` info output lines
    pub info: Color,
    /// Plain output lines
    pub output: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ocean()
    }
}

impl Theme {
    /// Cyan-on-dark theme, the default SOC-console look.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            alert: Color::LightRed,
            success: Color::LightCyan,
            info: Color::Blue,
            output: Color::Gray,
        }
    }

    /// Green-phosphor theme.
    pub fn matrix() -> Self {
        Self {
            text_primary: Color::LightGreen,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            alert: Color::LightRed,
            success: Color::LightGreen,
            info: Color::Green,
            output: Color::Green,
        }
    }

    /// Classic white-on-black terminal theme.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            info: Color::Blue,
            output: Color::Gray,
        }
    }

    /// Look up a theme by its config name. Unknown names get the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ocean" => Self::ocean(),
            "matrix" => Self::matrix(),
            "classic" => Self::classic(),
            _ => {
                tracing::warn!(theme = name, "unknown theme name, using default");
                Self::default()
            }
        }
    }

    // Style helpers

    /// Style for the typed command text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for window borders and dimmed chrome.
    pub fn chrome_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the prompt and title bar.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the block cursor.
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::REVERSED)
    }

    /// Style for an output line, classified by its prefix.
    ///
    /// `[!]` alerts, `[+]` successes, `[*]` progress/info, everything
    /// else plain.
    pub fn output_line_style(&self, line: &str) -> Style {
        let color = if line.starts_with("[!]") {
            self.alert
        } else if line.starts_with("[+]") {
            self.success
        } else if line.starts_with("[*]") {
            self.info
        } else {
            self.output
        };
        Style::default().fg(color)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_ocean() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Cyan);
    }

    #[test]
    fn from_name_resolves_known_themes() {
        assert_eq!(Theme::from_name("matrix").accent, Color::Green);
        assert_eq!(Theme::from_name("classic").accent, Color::Yellow);
        assert_eq!(Theme::from_name("ocean").accent, Color::Cyan);
    }

    #[test]
    fn from_name_falls_back_to_default() {
        let theme = Theme::from_name("no-such-theme");
        assert_eq!(theme.accent, Theme::default().accent);
    }

    #[test]
    fn output_lines_are_classified_by_prefix() {
        let theme = Theme::ocean();
        assert_eq!(
            theme.output_line_style("[!] SMB brute force detected").fg,
            Some(theme.alert)
        );
        assert_eq!(
            theme.output_line_style("[+] Host isolated successfully").fg,
            Some(theme.success)
        );
        assert_eq!(
            theme.output_line_style("[*] Updating blocklist...").fg,
            Some(theme.info)
        );
        assert_eq!(
            theme.output_line_style("plain tcpdump line").fg,
            Some(theme.output)
        );
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::ocean();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[36m")); // Cyan
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[97m")); // White
        assert!(primary.ends_with("\x1b[0m"));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Cyan), "\x1b[36m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Reset), "\x1b[0m");
    }
}
