//! Input feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: buffer, history and history cursor
//! - `update.rs`: key handling, submission, tab completion, paste
//! - `render.rs`: prompt line and cursor

mod render;
mod state;
mod update;

pub use render::render_input;
pub use state::InputState;
pub use update::{InputContext, complete_input, handle_main_key, handle_paste, submit_input};
