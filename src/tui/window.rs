//! Terminal window widget
//!
//! Draws one decorative terminal: a bordered box with traffic-light dots
//! and a title in the header row, the prompt plus the typed command with
//! a blinking block cursor, and the revealed output lines below.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::script::TerminalSpec;
use crate::sequencer::Sequencer;
use crate::theme::Theme;

/// Narrowest window we bother drawing.
pub const MIN_WINDOW_WIDTH: u16 = 24;
/// Widest window; long lines are clipped at the border.
pub const MAX_WINDOW_WIDTH: u16 = 48;

/// Chrome rows around the content: top border, header, bottom border.
const CHROME_ROWS: u16 = 3;

/// Window size for a spec: wide enough for its longest line (clamped),
/// tall enough for the command line plus the script's largest output.
///
/// Sized from the configuration rather than current sequencer state so
/// the window doesn't resize as the animation runs.
pub fn window_size(spec: &TerminalSpec) -> (u16, u16) {
    let mut content_width = spec.title.width();
    let mut max_output = 0usize;

    for cmd in &spec.script.commands {
        // Prompt, space, input, cursor cell
        let line = spec.title.width() + 1 + cmd.input.width() + 1;
        content_width = content_width.max(line);
        for out in &cmd.output {
            content_width = content_width.max(out.width() + 2);
        }
        max_output = max_output.max(cmd.output.len());
    }

    // 2 border columns + 1 padding column each side
    let width = (content_width as u16 + 4).clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH);
    let height = CHROME_ROWS + 1 + max_output as u16;
    (width, height)
}

/// Render one terminal window into `area`.
pub fn render_window(frame: &mut Frame, area: Rect, spec: &TerminalSpec, seq: &Sequencer, theme: &Theme) {
    if area.width < 4 || area.height < CHROME_ROWS {
        return;
    }

    // Windows overlap the backdrop; clear what's underneath first.
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.chrome_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(2 + seq.output_lines().len());

    // Header: traffic lights left, title right
    lines.push(header_line(spec, inner.width, theme));

    // Command line: prompt, typed prefix, blinking block cursor
    let mut cmd_spans = vec![
        Span::styled(spec.title.clone(), theme.accent_style()),
        Span::raw(" "),
        Span::styled(seq.typed_prefix().to_string(), theme.text_style()),
    ];
    if seq.cursor_visible() {
        cmd_spans.push(Span::styled(" ", theme.cursor_style()));
    }
    lines.push(Line::from(cmd_spans));

    // Output lines, colored by severity prefix
    for out in seq.output_lines() {
        lines.push(Line::from(Span::styled(
            format!("  {}", out),
            theme.output_line_style(out),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build the header row: `o o o` dots and the right-aligned title.
fn header_line<'a>(spec: &TerminalSpec, width: u16, theme: &Theme) -> Line<'a> {
    const DOTS: &str = "\u{25cf} \u{25cf} \u{25cf}";

    let title = spec.title.clone();
    let used = DOTS.width() + title.width();
    let pad = (width as usize).saturating_sub(used).max(1);

    Line::from(vec![
        Span::styled(DOTS.to_string(), theme.chrome_style()),
        Span::raw(" ".repeat(pad)),
        Span::styled(title, theme.accent_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{presets, Anchor, Command, Position, Script, TerminalSpec};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn spec_with_script(script: Script) -> TerminalSpec {
        TerminalSpec::new(1, Position::new(Anchor::TopLeft, 0, 0), "me@box:~$", script)
    }

    /// Render into a test buffer and return all rows as strings.
    fn render_to_rows(spec: &TerminalSpec, seq: &Sequencer, w: u16, h: u16) -> Vec<String> {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, w, h);
                render_window(frame, area, spec, seq, &Theme::ocean());
            })
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn window_size_fits_largest_output_block() {
        let spec = spec_with_script(Script::new(vec![
            Command::new("a").output(&["one"]),
            Command::new("b").output(&["one", "two", "three"]),
        ]));
        let (w, h) = window_size(&spec);
        assert!(w >= MIN_WINDOW_WIDTH && w <= MAX_WINDOW_WIDTH);
        // 3 chrome rows + command line + 3 output lines
        assert_eq!(h, 7);
    }

    #[test]
    fn window_width_is_clamped() {
        let long = "x".repeat(200);
        let spec = spec_with_script(Script::new(vec![Command::new(long)]));
        let (w, _) = window_size(&spec);
        assert_eq!(w, MAX_WINDOW_WIDTH);
    }

    #[test]
    fn preset_windows_fit_within_bounds() {
        for spec in presets::default_terminals() {
            let (w, h) = window_size(&spec);
            assert!((MIN_WINDOW_WIDTH..=MAX_WINDOW_WIDTH).contains(&w));
            assert!(h >= CHROME_ROWS + 1);
        }
    }

    #[test]
    fn rendered_window_shows_title_and_typed_prefix() {
        let spec = spec_with_script(Script::new(vec![Command::new("uptime").output(&["up 3 days"])]));
        let mut now = Instant::now();
        let mut seq = Sequencer::with_seed(spec.script.clone(), now, 7);

        // Type a few characters
        for _ in 0..3 {
            now += Duration::from_millis(100);
            seq.tick(now);
        }
        let typed = seq.typed_prefix().to_string();
        assert!(!typed.is_empty());

        let rows = render_to_rows(&spec, &seq, 40, 8);
        let all = rows.join("\n");
        assert!(all.contains("me@box:~$"), "title missing:\n{}", all);
        assert!(all.contains(&typed), "typed prefix missing:\n{}", all);
    }

    #[test]
    fn rendered_window_shows_output_lines_once_revealed() {
        let spec = spec_with_script(Script::new(vec![
            Command::new("ls").output(&["[+] done"]).delay_ms(1000),
        ]));
        let mut now = Instant::now();
        let mut seq = Sequencer::with_seed(spec.script.clone(), now, 7);

        // Run well past typing + pause
        for _ in 0..20 {
            now += Duration::from_millis(100);
            seq.tick(now);
        }
        assert!(!seq.output_lines().is_empty());

        let rows = render_to_rows(&spec, &seq, 40, 8);
        let all = rows.join("\n");
        assert!(all.contains("[+] done"), "output missing:\n{}", all);
    }

    #[test]
    fn tiny_area_renders_nothing_without_panicking() {
        let spec = spec_with_script(Script::new(vec![Command::new("ls")]));
        let seq = Sequencer::with_seed(spec.script.clone(), Instant::now(), 7);
        let rows = render_to_rows(&spec, &seq, 3, 2);
        // Area below minimum: buffer stays blank
        assert!(rows.iter().all(|r| r.trim().is_empty()));
    }
}
