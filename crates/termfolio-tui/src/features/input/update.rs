//! Input reducer: key handling, submission, completion, paste.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers as CrosstermKeyModifiers};
use termfolio_core::Dispatcher;
use termfolio_core::commands;
use termfolio_core::dispatch::completion_output;

use super::state::InputState;
use crate::common::text::sanitize_for_input;
use crate::effects::UiEffect;
use crate::mutations::{SessionMutation, StateMutation, TranscriptMutation};
use crate::transcript::TranscriptEntry;

type KeyResult = (Vec<UiEffect>, Vec<StateMutation>);

/// Context for handling main key input.
pub struct InputContext<'a> {
    pub dispatcher: &'a Dispatcher,
}

/// Handles paste events for input.
///
/// The input is a single line, so pasted newlines and tabs become spaces.
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.insert_str(&sanitize_for_input(text));
}

/// Handles a key press.
pub fn handle_main_key(input: &mut InputState, ctx: &InputContext<'_>, key: KeyEvent) -> KeyResult {
    let mods = Modifiers::from(&key);

    // Try each handler category in order; first match wins
    handle_line_editing(input, key.code, &mods)
        .or_else(|| handle_navigation(input, key.code, &mods))
        .or_else(|| handle_control_keys(input, key.code, &mods))
        .or_else(|| handle_completion(input, key.code, &mods))
        .or_else(|| handle_submission(input, ctx, key.code, &mods))
        .unwrap_or_else(|| handle_default_input(input, key.code, &mods))
}

/// Parsed key modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(CrosstermKeyModifiers::CONTROL),
            alt: key.modifiers.contains(CrosstermKeyModifiers::ALT),
        }
    }

    /// Shift alone still counts as plain typing.
    fn none(&self) -> bool {
        !self.ctrl && !self.alt
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.alt
    }

    fn only_alt(&self) -> bool {
        self.alt && !self.ctrl
    }
}

// =============================================================================
// Line editing: Backspace, Ctrl+U, Esc, Ctrl+W
// =============================================================================

fn handle_line_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    match code {
        KeyCode::Backspace if mods.none() => {
            input.backspace();
            Some((vec![], vec![]))
        }
        // Ctrl+U / Esc: kill the whole line
        KeyCode::Char('u') if mods.only_ctrl() => {
            input.clear();
            Some((vec![], vec![]))
        }
        KeyCode::Esc => {
            input.clear();
            Some((vec![], vec![]))
        }
        // Ctrl+W / Alt+Backspace: delete previous word
        KeyCode::Char('w') if mods.only_ctrl() => {
            input.delete_word_left();
            Some((vec![], vec![]))
        }
        KeyCode::Backspace if mods.only_alt() => {
            input.delete_word_left();
            Some((vec![], vec![]))
        }
        _ => None,
    }
}

// =============================================================================
// Navigation: history recall and transcript paging
// =============================================================================

fn handle_navigation(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> Option<KeyResult> {
    if !mods.none() {
        return None;
    }
    match code {
        KeyCode::Up => {
            input.navigate_up();
            Some((vec![], vec![]))
        }
        KeyCode::Down => {
            input.navigate_down();
            Some((vec![], vec![]))
        }
        KeyCode::PageUp => Some((
            vec![],
            vec![StateMutation::Transcript(TranscriptMutation::PageUp)],
        )),
        KeyCode::PageDown => Some((
            vec![],
            vec![StateMutation::Transcript(TranscriptMutation::PageDown)],
        )),
        _ => None,
    }
}

// =============================================================================
// Control keys: Ctrl+C, Ctrl+D
// =============================================================================

fn handle_control_keys(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    if !mods.only_ctrl() {
        return None;
    }
    match code {
        // Ctrl+C: clear a pending line first, quit on an empty one
        KeyCode::Char('c') => {
            if input.is_empty() {
                Some((vec![UiEffect::Quit], vec![]))
            } else {
                input.clear();
                Some((vec![], vec![]))
            }
        }
        KeyCode::Char('d') if input.is_empty() => Some((vec![UiEffect::Quit], vec![])),
        // Swallow other control chords so they never reach the buffer.
        KeyCode::Char(_) => Some((vec![], vec![])),
        _ => None,
    }
}

// =============================================================================
// Completion: Tab
// =============================================================================

fn handle_completion(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> Option<KeyResult> {
    match code {
        KeyCode::Tab if mods.none() => Some(complete_input(input)),
        // Tab never inserts a character, whatever the modifiers.
        KeyCode::Tab | KeyCode::BackTab => Some((vec![], vec![])),
        _ => None,
    }
}

/// Completes the buffer against command names.
///
/// A single candidate replaces the buffer. Several candidates are listed in
/// the transcript and the buffer is left alone. Nothing is added to history.
pub fn complete_input(input: &mut InputState) -> KeyResult {
    let text = input.get_text();
    let matches = commands::complete(&text);
    match matches.as_slice() {
        [] => (vec![], vec![]),
        [single] => {
            input.set_text(single);
            (vec![], vec![])
        }
        _ => {
            tracing::debug!(prefix = %text, count = matches.len(), "ambiguous completion");
            let entry = TranscriptEntry::command(text, completion_output(&matches));
            (
                vec![],
                vec![StateMutation::Transcript(TranscriptMutation::Append(entry))],
            )
        }
    }
}

// =============================================================================
// Submission: Enter key
// =============================================================================

fn handle_submission(
    input: &mut InputState,
    ctx: &InputContext<'_>,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    match code {
        KeyCode::Enter if mods.none() => Some(submit_input(input, ctx)),
        _ => None,
    }
}

/// Submits the buffer.
///
/// Blank input does nothing. `clear` resets the transcript without going
/// through the dispatcher. Everything else is dispatched and its reply
/// appended. Non-blank lines are always recorded in history exactly as typed.
pub fn submit_input(input: &mut InputState, ctx: &InputContext<'_>) -> KeyResult {
    let text = input.get_text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (vec![], vec![]);
    }

    let mut mutations = Vec::new();
    if trimmed.to_lowercase() == "clear" {
        mutations.push(StateMutation::Transcript(TranscriptMutation::ResetToWelcome));
    } else {
        let reply = ctx.dispatcher.dispatch(&text);
        mutations.push(StateMutation::Transcript(TranscriptMutation::Append(
            TranscriptEntry::command(text.clone(), reply.output),
        )));
        if let Some(theme) = reply.set_theme {
            mutations.push(StateMutation::Session(SessionMutation::SetTheme(theme)));
        }
    }

    input.push_history(text);
    input.clear();
    (vec![], mutations)
}

// =============================================================================
// Default input handling: character insertion
// =============================================================================

fn handle_default_input(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> KeyResult {
    if let KeyCode::Char(ch) = code
        && mods.none()
    {
        input.insert_char(ch);
    }
    (vec![], vec![])
}

#[cfg(test)]
mod tests {
    use termfolio_core::Theme;
    use termfolio_core::content::Content;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, CrosstermKeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), CrosstermKeyModifiers::CONTROL)
    }

    fn type_text(input: &mut InputState, ctx: &InputContext<'_>, text: &str) {
        for ch in text.chars() {
            handle_main_key(input, ctx, key(KeyCode::Char(ch)));
        }
    }

    fn appended(mutations: &[StateMutation]) -> Vec<&TranscriptEntry> {
        mutations
            .iter()
            .filter_map(|mutation| match mutation {
                StateMutation::Transcript(TranscriptMutation::Append(entry)) => Some(entry),
                _ => None,
            })
            .collect()
    }

    fn with_ctx(test: impl FnOnce(&mut InputState, &InputContext<'_>)) {
        let dispatcher = Dispatcher::new(Content::builtin());
        let ctx = InputContext {
            dispatcher: &dispatcher,
        };
        let mut input = InputState::new();
        test(&mut input, &ctx);
    }

    #[test]
    fn test_submit_appends_one_entry_and_one_history_item() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "hello");
            let (effects, mutations) = handle_main_key(input, ctx, key(KeyCode::Enter));

            assert!(effects.is_empty());
            let entries = appended(&mutations);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].command.as_deref(), Some("hello"));
            assert!(entries[0].output.to_plain_text().contains("Welcome"));
            assert_eq!(input.history, vec!["hello".to_string()]);
            assert_eq!(input.as_str(), "");
            assert_eq!(input.history_index, None);
        });
    }

    #[test]
    fn test_blank_submit_is_noop() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "   ");
            let (effects, mutations) = handle_main_key(input, ctx, key(KeyCode::Enter));

            assert!(effects.is_empty());
            assert!(mutations.is_empty());
            assert!(input.history.is_empty());
        });
    }

    #[test]
    fn test_submit_keeps_raw_text() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "  LS ");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Enter));

            let entries = appended(&mutations);
            assert_eq!(entries[0].command.as_deref(), Some("  LS "));
            assert!(entries[0].output.to_plain_text().contains("My Projects:"));
            assert_eq!(input.history, vec!["  LS ".to_string()]);
        });
    }

    #[test]
    fn test_clear_resets_transcript_and_keeps_history() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "about");
            handle_main_key(input, ctx, key(KeyCode::Enter));
            type_text(input, ctx, " Clear ");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Enter));

            assert_eq!(
                mutations,
                vec![StateMutation::Transcript(TranscriptMutation::ResetToWelcome)]
            );
            assert_eq!(input.history, vec!["about".to_string(), " Clear ".to_string()]);
            assert_eq!(input.as_str(), "");
        });
    }

    #[test]
    fn test_theme_change_requested() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "theme light");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Enter));

            assert!(mutations.contains(&StateMutation::Session(SessionMutation::SetTheme(
                Theme::Light
            ))));
            let entries = appended(&mutations);
            assert!(entries[0].output.to_plain_text().contains("Theme switched to light"));
        });
    }

    #[test]
    fn test_invalid_theme_requests_no_change() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "theme purple");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Enter));

            assert_eq!(mutations.len(), 1);
            let entries = appended(&mutations);
            assert!(entries[0].output.to_plain_text().contains("Invalid theme"));
        });
    }

    #[test]
    fn test_recall_after_submissions() {
        with_ctx(|input, ctx| {
            for line in ["a", "b", "c"] {
                type_text(input, ctx, line);
                handle_main_key(input, ctx, key(KeyCode::Enter));
            }

            for expected in ["c", "b", "a", "a"] {
                handle_main_key(input, ctx, key(KeyCode::Up));
                assert_eq!(input.as_str(), expected);
            }
            for expected in ["b", "c", ""] {
                handle_main_key(input, ctx, key(KeyCode::Down));
                assert_eq!(input.as_str(), expected);
            }
            assert_eq!(input.history_index, None);
        });
    }

    #[test]
    fn test_tab_lists_ambiguous_matches() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "pro");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Tab));

            let entries = appended(&mutations);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].command.as_deref(), Some("pro"));
            assert_eq!(
                entries[0].output.to_plain_lines(),
                vec!["Available matches:", "- projects", "- project"]
            );
            assert_eq!(input.as_str(), "pro");
            assert!(input.history.is_empty());
        });
    }

    #[test]
    fn test_tab_completes_unique_match() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "hel");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Tab));

            assert!(mutations.is_empty());
            assert_eq!(input.as_str(), "help");
        });
    }

    #[test]
    fn test_tab_without_match_is_noop() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "xyz");
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::Tab));

            assert!(mutations.is_empty());
            assert_eq!(input.as_str(), "xyz");
        });
    }

    #[test]
    fn test_tab_ignores_aliases_and_case() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "l");
            handle_main_key(input, ctx, key(KeyCode::Tab));
            assert_eq!(input.as_str(), "l");

            input.set_text("HEL");
            handle_main_key(input, ctx, key(KeyCode::Tab));
            assert_eq!(input.as_str(), "HEL");
        });
    }

    #[test]
    fn test_ctrl_c_clears_then_quits() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "abc");
            let (effects, _) = handle_main_key(input, ctx, ctrl('c'));
            assert!(effects.is_empty());
            assert_eq!(input.as_str(), "");

            let (effects, _) = handle_main_key(input, ctx, ctrl('c'));
            assert_eq!(effects, vec![UiEffect::Quit]);
        });
    }

    #[test]
    fn test_ctrl_d_quits_only_on_empty_buffer() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "a");
            let (effects, _) = handle_main_key(input, ctx, ctrl('d'));
            assert!(effects.is_empty());
            assert_eq!(input.as_str(), "a");

            input.clear();
            let (effects, _) = handle_main_key(input, ctx, ctrl('d'));
            assert_eq!(effects, vec![UiEffect::Quit]);
        });
    }

    #[test]
    fn test_editing_keys() {
        with_ctx(|input, ctx| {
            type_text(input, ctx, "project Foo");
            handle_main_key(input, ctx, key(KeyCode::Backspace));
            assert_eq!(input.as_str(), "project Fo");

            handle_main_key(input, ctx, ctrl('w'));
            assert_eq!(input.as_str(), "project ");

            handle_main_key(input, ctx, ctrl('u'));
            assert_eq!(input.as_str(), "");

            type_text(input, ctx, "x");
            handle_main_key(input, ctx, key(KeyCode::Esc));
            assert_eq!(input.as_str(), "");
        });
    }

    #[test]
    fn test_shifted_chars_are_typed() {
        with_ctx(|input, ctx| {
            handle_main_key(
                input,
                ctx,
                KeyEvent::new(KeyCode::Char('A'), CrosstermKeyModifiers::SHIFT),
            );
            assert_eq!(input.as_str(), "A");
        });
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputState::new();
        input.insert_str("project ");
        handle_paste(&mut input, "Terminal\nPortfolio");
        assert_eq!(input.as_str(), "project Terminal Portfolio");
    }

    #[test]
    fn test_page_keys_request_scroll() {
        with_ctx(|input, ctx| {
            let (_, mutations) = handle_main_key(input, ctx, key(KeyCode::PageUp));
            assert_eq!(
                mutations,
                vec![StateMutation::Transcript(TranscriptMutation::PageUp)]
            );
        });
    }
}
