//! Pure view/render functions for the TUI.
//!
//! Functions here take `&TuiState`, draw to a ratatui Frame and never mutate
//! state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::common::Scrollbar;
use crate::state::TuiState;
use crate::statusline::render_status_line;
use crate::{input, transcript};

/// Height of the input line.
const INPUT_HEIGHT: u16 = 1;

/// Height of status line below input.
const STATUS_HEIGHT: u16 = 1;

/// Transcript horizontal margin (padding on each side).
const TRANSCRIPT_MARGIN: u16 = 1;

/// Width reserved for the scrollbar on the right side.
const SCROLLBAR_WIDTH: u16 = 1;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Text area of the transcript (margins and scrollbar excluded).
    pub transcript: Rect,
    /// Full transcript pane; the scrollbar sits on its right edge.
    pub transcript_pane: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Splits the screen into transcript, input and status rows.
///
/// Shared by the reducer (line counts for scrolling) and by render.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Transcript
            Constraint::Length(INPUT_HEIGHT),  // Input
            Constraint::Length(STATUS_HEIGHT), // Status line
        ])
        .split(area);

    let pane = chunks[0];
    let transcript = Rect {
        x: pane.x + TRANSCRIPT_MARGIN.min(pane.width),
        y: pane.y,
        width: pane
            .width
            .saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH),
        height: pane.height,
    };
    let input = Rect {
        x: chunks[1].x + TRANSCRIPT_MARGIN.min(chunks[1].width),
        width: chunks[1].width.saturating_sub(TRANSCRIPT_MARGIN),
        ..chunks[1]
    };
    let status = Rect {
        x: chunks[2].x + TRANSCRIPT_MARGIN.min(chunks[2].width),
        width: chunks[2].width.saturating_sub(TRANSCRIPT_MARGIN * 2),
        ..chunks[2]
    };

    ScreenLayout {
        transcript,
        transcript_pane: pane,
        input,
        status,
    }
}

/// Renders the entire TUI to the frame.
pub fn render(state: &TuiState, frame: &mut Frame) {
    let area = frame.area();
    let palette = state.palette();
    let layout = screen_layout(area);

    // Paint the theme background first so margins match it.
    frame.render_widget(
        Block::default().style(
            Style::default()
                .fg(palette.foreground)
                .bg(palette.background),
        ),
        area,
    );

    let total_lines = transcript::render_transcript(
        frame,
        layout.transcript,
        &state.transcript,
        &state.prompt,
        &palette,
    );
    let viewport = layout.transcript.height as usize;
    frame.render_widget(
        Scrollbar::new(
            total_lines,
            viewport,
            state.transcript.offset_within(total_lines, viewport),
        )
        .style(Style::default().fg(palette.muted)),
        layout.transcript_pane,
    );

    input::render_input(
        frame,
        layout.input,
        &state.input,
        &state.prompt,
        &palette,
    );

    render_status_line(
        frame,
        layout.status,
        state.theme(),
        state.transcript.lines_below(),
        &palette,
    );
}
