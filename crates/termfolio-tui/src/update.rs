//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::{SessionMutation, StateMutation};
use crate::state::TuiState;
use crate::{input, render, transcript};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut TuiState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => {
            handle_frame(state, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
    }
}

/// Applies cross-slice mutations in order.
pub fn apply_mutations(state: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Transcript(mutation) => {
                transcript::apply_mutation(&mut state.transcript, mutation);
            }
            StateMutation::Session(SessionMutation::SetTheme(theme)) => state.set_theme(theme),
        }
    }
}

/// Keeps the transcript line count current for the terminal size so paging
/// and scroll clamping work on fresh numbers.
///
/// Lines are only re-wrapped when the entries or the width changed.
fn handle_frame(state: &mut TuiState, width: u16, height: u16) {
    let layout = render::screen_layout(Rect::new(0, 0, width, height));
    let text_width = layout.transcript.width as usize;
    let total_lines = match state.transcript.measured_lines(text_width) {
        Some(total) => total,
        None => {
            let total =
                transcript::build_lines(state.transcript.entries(), &state.prompt, text_width)
                    .len();
            state.transcript.set_measured_width(text_width);
            total
        }
    };
    state
        .transcript
        .update_layout(total_lines, layout.transcript.height as usize);
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(state: &mut TuiState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => {
            let mutations = transcript::handle_mouse(mouse);
            apply_mutations(state, mutations);
            vec![]
        }
        Event::Paste(text) => {
            input::handle_paste(&mut state.input, &text);
            vec![]
        }
        // Resize is picked up by the next Frame event.
        _ => vec![],
    }
}

fn handle_key(state: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    // Some platforms report releases too; act on presses and repeats only.
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    let ctx = input::InputContext {
        dispatcher: &state.dispatcher,
    };
    let (effects, mutations) = input::handle_main_key(&mut state.input, &ctx, key);
    apply_mutations(state, mutations);
    effects
}
