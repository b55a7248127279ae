//! Responsive visibility and window placement
//!
//! Breakpoint scheme: below a "mobile" width nothing renders, in the
//! "tablet" band only the first two terminals render, and above it
//! everything renders. Widths are logical
//! pixels; the TUI maps terminal columns to logical width assuming an
//! 8px character cell, so a 96-column terminal sits right at the 768px
//! mobile breakpoint.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use crate::script::{Anchor, Position};

/// Assumed width of one terminal cell in logical pixels.
pub const CELL_PX: u16 = 8;

/// Width breakpoints for the visibility policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Below this width, render no terminals
    pub mobile: u16,
    /// Between mobile and this width, cap the terminal count
    pub tablet: u16,
    /// Maximum terminals shown in the tablet band
    pub tablet_max: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768,
            tablet: 1024,
            tablet_max: 2,
        }
    }
}

impl Breakpoints {
    /// How many of `configured` terminals are visible at `width` logical px.
    ///
    /// The first N configured terminals are shown, in configured order.
    pub fn visible_count(&self, width: u16, configured: usize) -> usize {
        if width < self.mobile {
            0
        } else if width < self.tablet {
            self.tablet_max.min(configured)
        } else {
            configured
        }
    }
}

/// Logical viewport width for a terminal that is `cols` columns wide.
pub fn logical_width(cols: u16) -> u16 {
    cols.saturating_mul(CELL_PX)
}

/// Resolve an anchored percent position to a window `Rect` inside `area`.
///
/// The offset is measured from the anchor corner inward; the window is
/// clamped so it never extends past the opposite edge.
pub fn place_window(position: Position, area: Rect, win_width: u16, win_height: u16) -> Rect {
    let win_width = win_width.min(area.width);
    let win_height = win_height.min(area.height);

    let x_off = area.width.saturating_mul(position.x) / 100;
    let y_off = area.height.saturating_mul(position.y) / 100;

    let max_x = area.width.saturating_sub(win_width);
    let max_y = area.height.saturating_sub(win_height);

    let (x, y) = match position.anchor {
        Anchor::TopLeft => (x_off.min(max_x), y_off.min(max_y)),
        Anchor::TopRight => (max_x.saturating_sub(x_off), y_off.min(max_y)),
        Anchor::BottomLeft => (x_off.min(max_x), max_y.saturating_sub(y_off)),
        Anchor::BottomRight => (max_x.saturating_sub(x_off), max_y.saturating_sub(y_off)),
    };

    Rect::new(area.x + x, area.y + y, win_width, win_height)
}
