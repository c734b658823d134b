//! Transcript reducer.

use crossterm::event::{MouseEvent, MouseEventKind};

use super::state::TranscriptState;
use crate::mutations::{StateMutation, TranscriptMutation};

/// Lines moved per mouse wheel notch.
const MOUSE_SCROLL_LINES: usize = 3;

pub fn apply_mutation(transcript: &mut TranscriptState, mutation: TranscriptMutation) {
    match mutation {
        TranscriptMutation::Append(entry) => transcript.push(entry),
        TranscriptMutation::ResetToWelcome => transcript.reset(),
        TranscriptMutation::PageUp => transcript.page_up(),
        TranscriptMutation::PageDown => transcript.page_down(),
        TranscriptMutation::ScrollUp(lines) => transcript.scroll_up(lines),
        TranscriptMutation::ScrollDown(lines) => transcript.scroll_down(lines),
    }
}

/// Maps mouse wheel events to scroll mutations; everything else is ignored.
pub fn handle_mouse(mouse: MouseEvent) -> Vec<StateMutation> {
    let mutation = match mouse.kind {
        MouseEventKind::ScrollUp => TranscriptMutation::ScrollUp(MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => TranscriptMutation::ScrollDown(MOUSE_SCROLL_LINES),
        _ => return vec![],
    };
    vec![StateMutation::Transcript(mutation)]
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton};

    use super::*;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_wheel_maps_to_scroll_mutations() {
        assert_eq!(
            handle_mouse(mouse(MouseEventKind::ScrollUp)),
            vec![StateMutation::Transcript(TranscriptMutation::ScrollUp(3))]
        );
        assert_eq!(
            handle_mouse(mouse(MouseEventKind::ScrollDown)),
            vec![StateMutation::Transcript(TranscriptMutation::ScrollDown(3))]
        );
    }

    #[test]
    fn test_clicks_are_ignored() {
        assert!(handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left))).is_empty());
    }
}
