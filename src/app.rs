//! Screensaver application loop
//!
//! Wires the pieces together: holds one sequencer per configured
//! terminal, applies the responsive visibility policy on resize, ticks
//! the visible sequencers, and draws their windows each frame.
//!
//! Hidden terminals are simply not ticked - their state cannot change
//! while hidden - and they restart from scratch when they become visible
//! again.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use tracing::debug;

use crate::config::Config;
use crate::layout::{self, Breakpoints};
use crate::script::TerminalSpec;
use crate::sequencer::{Clock, Sequencer, SystemClock};
use crate::theme::Theme;
use crate::tui::{window, Tui};

/// Top-level screensaver state.
pub struct App {
    terminals: Vec<(TerminalSpec, Sequencer)>,
    theme: Theme,
    breakpoints: Breakpoints,
    /// How many terminals the responsive policy currently shows
    visible: usize,
    tick_rate: Duration,
}

impl App {
    /// Build the app from terminal specs and user config.
    pub fn new(specs: Vec<TerminalSpec>, config: &Config, now: Instant) -> Self {
        let terminals = specs
            .into_iter()
            .map(|spec| {
                let seq = Sequencer::new(spec.script.clone(), now);
                (spec, seq)
            })
            .collect();

        Self {
            terminals,
            theme: Theme::from_name(&config.theme),
            breakpoints: config.breakpoints,
            visible: 0,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        }
    }

    /// Number of terminals currently shown.
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Recompute visibility for a terminal `cols` columns wide.
    ///
    /// Terminals that just became visible restart their animation from
    /// defaults; terminals that became hidden keep their sequencer but
    /// stop receiving ticks.
    pub fn handle_resize(&mut self, cols: u16, now: Instant) {
        let width = layout::logical_width(cols);
        let new_visible = self.breakpoints.visible_count(width, self.terminals.len());

        if new_visible != self.visible {
            debug!(cols, width, from = self.visible, to = new_visible, "visibility changed");
        }
        for (_, seq) in self.terminals[self.visible.min(new_visible)..new_visible].iter_mut() {
            seq.reset(now);
        }
        self.visible = new_visible;
    }

    /// Advance every visible terminal's animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        for (_, seq) in self.terminals[..self.visible].iter_mut() {
            seq.tick(now);
        }
    }

    /// Draw the visible terminal windows.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        for (spec, seq) in &self.terminals[..self.visible] {
            if spec.script.is_empty() {
                continue;
            }
            let (w, h) = window::window_size(spec);
            let rect = layout::place_window(spec.position, area, w, h);
            window::render_window(frame, rect, spec, seq, &self.theme);
        }
    }

    /// Access a terminal's sequencer by position (for tests/inspection).
    pub fn sequencer(&self, idx: usize) -> Option<&Sequencer> {
        self.terminals.get(idx).map(|(_, seq)| seq)
    }

    /// Run the screensaver until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<()> {
        let clock = SystemClock;
        let mut tui = Tui::enter()?;

        let (cols, _) = tui.size()?;
        self.handle_resize(cols, clock.now());

        loop {
            if event::poll(self.tick_rate)? {
                match event::read()? {
                    Event::Key(key) if is_quit_key(key) => break,
                    Event::Resize(cols, _) => self.handle_resize(cols, clock.now()),
                    _ => {}
                }
            }
            self.tick(clock.now());
            tui.terminal().draw(|frame| self.render(frame))?;
        }

        Ok(())
    }
}

/// Quit on `q`, `Esc`, or `Ctrl-C`.
fn is_quit_key(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
