//! Cross-slice state mutations.
//!
//! Feature reducers return these mutations to request changes outside their
//! own slice. The main reducer applies them in order.

use termfolio_core::Theme;

use crate::transcript::TranscriptEntry;

/// Mutations for cross-slice state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    Transcript(TranscriptMutation),
    Session(SessionMutation),
}

/// Transcript slice mutations requested by other slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptMutation {
    Append(TranscriptEntry),
    /// Drop all entries and show the welcome banner again.
    ResetToWelcome,
    PageUp,
    PageDown,
    ScrollUp(usize),
    ScrollDown(usize),
}

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMutation {
    SetTheme(Theme),
}
