//! Feature slices for the TUI (state/update/render per slice).

pub mod input;
pub mod statusline;
pub mod transcript;
