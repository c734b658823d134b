//! Transcript rendering.
//!
//! Builds styled lines for the current width and draws the slice selected by
//! the scroll offset, bottom-aligned like a real terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::build::build_lines;
use super::state::TranscriptState;
use super::style::{Style as TranscriptStyle, StyledLine};
use crate::common::Palette;

/// Draws the visible slice and returns the total wrapped line count.
pub fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    transcript: &TranscriptState,
    prompt: &str,
    palette: &Palette,
) -> usize {
    let height = area.height as usize;
    let lines = build_lines(transcript.entries(), prompt, area.width as usize);
    let total_lines = lines.len();
    let offset = transcript.offset_within(total_lines, height);
    let content: Vec<Line<'static>> = lines
        .into_iter()
        .skip(offset)
        .take(height)
        .map(|line| convert_styled_line(line, palette))
        .collect();

    // Bottom-align: pad at the top while the content is shorter than the pane.
    let mut visible = vec![Line::default(); height.saturating_sub(content.len())];
    visible.extend(content);

    // No .wrap(): lines are already wrapped to the pane width.
    let paragraph = Paragraph::new(visible)
        .style(Style::default().fg(palette.foreground).bg(palette.background));
    frame.render_widget(paragraph, area);
    total_lines
}

fn convert_styled_line(styled_line: StyledLine, palette: &Palette) -> Line<'static> {
    let spans: Vec<Span<'static>> = styled_line
        .spans
        .into_iter()
        .map(|span| Span::styled(span.text, convert_style(span.style, palette)))
        .collect();
    Line::from(spans)
}

fn convert_style(style: TranscriptStyle, palette: &Palette) -> Style {
    match style {
        TranscriptStyle::Plain => Style::default().fg(palette.foreground),
        TranscriptStyle::Prompt => Style::default()
            .fg(palette.prompt)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Command => Style::default().fg(palette.foreground),
        TranscriptStyle::Strong => Style::default()
            .fg(palette.strong)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Code => Style::default().fg(palette.code),
        TranscriptStyle::Link => Style::default()
            .fg(palette.link)
            .add_modifier(Modifier::UNDERLINED),
        TranscriptStyle::LinkTarget => Style::default().fg(palette.muted),
        TranscriptStyle::Bullet => Style::default().fg(palette.prompt),
    }
}
