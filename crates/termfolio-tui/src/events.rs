//! UI event types.
//!
//! All external inputs are converted to `UiEvent` before being processed by
//! the reducer.

use crossterm::event::Event as CrosstermEvent;

/// Events processed by the reducer.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Start of a loop iteration, with the current terminal size.
    ///
    /// Handled first so layout-dependent state (line counts, scroll clamping)
    /// is current before input events are applied.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(CrosstermEvent),
}
