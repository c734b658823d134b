//! Transcript scrollbar.
//!
//! The thumb length depends only on the content and viewport sizes, so it
//! keeps the same size while scrolling and lands exactly on the last row at
//! the bottom.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    /// First visible line (0 = top).
    scroll_offset: usize,
    style: Style,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, scroll_offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            scroll_offset,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows of the track covered by the thumb, or `None` when everything fits.
    fn thumb(&self, track_len: usize) -> Option<Range<usize>> {
        let max_offset = self.total_lines.checked_sub(self.viewport_height)?;
        if max_offset == 0 || track_len == 0 {
            return None;
        }

        let thumb_len = (track_len * self.viewport_height / self.total_lines).clamp(1, track_len);
        let travel = track_len - thumb_len;
        let start = self.scroll_offset.min(max_offset) * travel / max_offset;
        Some(start..start + thumb_len)
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(thumb) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.right().saturating_sub(1);
        for (row, y) in (area.top()..area.bottom()).enumerate() {
            let symbol = if thumb.contains(&row) {
                THUMB_SYMBOL
            } else {
                TRACK_SYMBOL
            };
            buf.set_string(x, y, symbol, self.style);
        }
    }
}
