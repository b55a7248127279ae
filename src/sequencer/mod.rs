//! Typing sequencer: the per-terminal animation state machine
//!
//! Each decorative terminal owns one `Sequencer`. It cycles through the
//! terminal's script forever:
//!
//! ```text
//! Typing -> PauseBeforeOutput -> ShowingOutput -> (advance) -> Typing
//! ```
//!
//! - **Typing**: one character of the active command appears per interval
//!   (50ms plus 0-30ms of random jitter, so the typing looks human).
//! - **PauseBeforeOutput**: a fixed 500ms beat before output appears.
//! - **ShowingOutput**: the command's output lines sit on screen for its
//!   configured `delay_ms`, then the sequencer advances to the next
//!   command (wrapping at the end of the script).
//!
//! The machine is driven by a single `tick(now)` call from the app loop;
//! all deadlines live inside the sequencer. There are no callbacks and no
//! timers to leak - dropping the sequencer ends the animation, and a
//! sequencer that is not ticked never mutates.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::script::{Command, Script};

/// Base interval between typed characters.
pub const TYPE_INTERVAL_MS: u64 = 50;
/// Upper bound of the random jitter added to each typing interval.
pub const TYPE_JITTER_MS: u64 = 30;
/// Fixed pause between typing completing and output appearing.
pub const OUTPUT_PAUSE_MS: u64 = 500;
/// Cursor blink half-period.
pub const CURSOR_BLINK_MS: u64 = 500;

/// Where the sequencer is within the current command's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Characters of the input line are appearing one by one
    Typing,
    /// Input fully typed; waiting the fixed beat before output
    PauseBeforeOutput,
    /// Output visible; waiting out the command's dwell time
    ShowingOutput,
}

/// The animation state machine for one terminal.
///
/// All state is transient and exclusively owned; nothing here outlives
/// the sequencer or is shared between terminals.
#[derive(Debug)]
pub struct Sequencer {
    script: Script,
    command_idx: usize,
    /// Typed prefix length of the active input, in chars
    typed_len: usize,
    phase: Phase,
    visible_output: Vec<String>,
    cursor_visible: bool,
    /// Deadline for the next phase action (type a char / reveal / advance)
    next_transition: Instant,
    /// Deadline for the next cursor toggle, independent of phase
    next_cursor_toggle: Instant,
    rng: StdRng,
}

impl Sequencer {
    /// Create a sequencer starting its script at `now`.
    pub fn new(script: Script, now: Instant) -> Self {
        Self::with_rng(script, now, StdRng::from_entropy())
    }

    /// Create a sequencer with a fixed RNG seed (deterministic jitter).
    pub fn with_seed(script: Script, now: Instant, seed: u64) -> Self {
        Self::with_rng(script, now, StdRng::seed_from_u64(seed))
    }

    fn with_rng(script: Script, now: Instant, rng: StdRng) -> Self {
        let mut seq = Self {
            script,
            command_idx: 0,
            typed_len: 0,
            phase: Phase::Typing,
            visible_output: Vec::new(),
            cursor_visible: true,
            next_transition: now,
            next_cursor_toggle: now + Duration::from_millis(CURSOR_BLINK_MS),
            rng,
        };
        seq.next_transition = now + seq.type_interval();
        seq
    }

    /// Reset all transient state, as if freshly constructed at `now`.
    ///
    /// Used when a terminal that was hidden by the responsive policy
    /// becomes visible again.
    pub fn reset(&mut self, now: Instant) {
        self.command_idx = 0;
        self.typed_len = 0;
        self.phase = Phase::Typing;
        self.visible_output.clear();
        self.cursor_visible = true;
        self.next_transition = now + self.type_interval();
        self.next_cursor_toggle = now + Duration::from_millis(CURSOR_BLINK_MS);
    }

    /// Advance the state machine to `now`.
    ///
    /// Processes every deadline that has elapsed since the last tick, so
    /// the caller's tick rate only affects smoothness, never correctness.
    /// Returns true if any visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.script.is_empty() {
            return false;
        }

        let mut changed = false;

        // Cursor blink runs on its own cadence, decoupled from the phases.
        while now >= self.next_cursor_toggle {
            self.cursor_visible = !self.cursor_visible;
            self.next_cursor_toggle += Duration::from_millis(CURSOR_BLINK_MS);
            changed = true;
        }

        while now >= self.next_transition {
            let deadline = self.next_transition;
            self.step(deadline);
            changed = true;
        }

        changed
    }

    /// Perform the single phase action due at `deadline` and schedule the
    /// next one relative to it (so timing does not drift with tick rate).
    fn step(&mut self, deadline: Instant) {
        let cmd = &self.script.commands[self.command_idx];
        match self.phase {
            Phase::Typing => {
                let total = cmd.input_chars();
                if self.typed_len < total {
                    self.typed_len += 1;
                }
                if self.typed_len >= total {
                    self.phase = Phase::PauseBeforeOutput;
                    self.next_transition = deadline + Duration::from_millis(OUTPUT_PAUSE_MS);
                } else {
                    self.next_transition = deadline + self.type_interval();
                }
            }
            Phase::PauseBeforeOutput => {
                // An empty output list simply reveals nothing.
                self.visible_output = cmd.output.clone();
                self.phase = Phase::ShowingOutput;
                self.next_transition = deadline + Duration::from_millis(cmd.delay_ms);
            }
            Phase::ShowingOutput => {
                if cmd.clear {
                    self.visible_output.clear();
                }
                self.typed_len = 0;
                self.command_idx = (self.command_idx + 1) % self.script.len();
                self.phase = Phase::Typing;
                self.next_transition = deadline + self.type_interval();
            }
        }
    }

    fn type_interval(&mut self) -> Duration {
        Duration::from_millis(TYPE_INTERVAL_MS + self.rng.gen_range(0..=TYPE_JITTER_MS))
    }

    // --- Accessors for rendering ---

    /// Index of the active command within the script.
    pub fn command_index(&self) -> usize {
        self.command_idx
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Number of typed characters of the active input.
    pub fn typed_len(&self) -> usize {
        self.typed_len
    }

    /// The part of the active command line that has been typed so far.
    pub fn typed_prefix(&self) -> &str {
        match self.active_command() {
            Some(cmd) => match cmd.input.char_indices().nth(self.typed_len) {
                Some((byte_idx, _)) => &cmd.input[..byte_idx],
                None => &cmd.input,
            },
            None => "",
        }
    }

    /// The output lines currently on screen.
    pub fn output_lines(&self) -> &[String] {
        &self.visible_output
    }

    /// The command currently being animated, if the script is non-empty.
    pub fn active_command(&self) -> Option<&Command> {
        self.script.commands.get(self.command_idx)
    }
}
