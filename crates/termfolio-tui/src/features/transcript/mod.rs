//! Transcript feature slice.
//!
//! The scrollback of submitted commands and their output.
//!
//! ## Module Structure
//!
//! - `state.rs`: entries and scroll position
//! - `style.rs`: UI-agnostic styled lines
//! - `build.rs`: entries to wrapped styled lines
//! - `update.rs`: applies transcript mutations
//! - `render.rs`: conversion to ratatui lines and drawing

mod build;
mod render;
mod state;
mod style;
mod update;

pub use build::build_lines;
pub use render::render_transcript;
pub use state::{ScrollMode, TranscriptEntry, TranscriptState};
pub use style::{Style, StyledLine, StyledSpan};
pub use update::{apply_mutation, handle_mouse};
