//! Status line feature slice.
//!
//! One row under the input with the active theme, the scroll position and
//! key hints.

mod render;

pub use render::render_status_line;
