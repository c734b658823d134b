//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! TuiState
//! ├── input: InputState           (buffer, command history, history cursor)
//! ├── transcript: TranscriptState (entries, scroll, layout)
//! ├── dispatcher: Dispatcher      (command table + portfolio content)
//! ├── prompt                      (text echoed before each command)
//! └── theme                       (changed only through `set_theme`)
//! ```

use termfolio_core::{Dispatcher, Theme};

use crate::common::Palette;
use crate::input::InputState;
use crate::transcript::TranscriptState;

/// All UI state owned by the runtime.
#[derive(Debug)]
pub struct TuiState {
    /// Flag to quit the application.
    pub should_quit: bool,
    pub input: InputState,
    pub transcript: TranscriptState,
    pub dispatcher: Dispatcher,
    pub prompt: String,
    theme: Theme,
}

impl TuiState {
    pub fn new(dispatcher: Dispatcher, theme: Theme, prompt: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            input: InputState::new(),
            transcript: TranscriptState::new(),
            dispatcher,
            prompt: prompt.into(),
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches the theme for the whole session.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            tracing::info!(from = %self.theme, to = %theme, "theme changed");
        }
        self.theme = theme;
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }
}
