//! Helpers shared by the feature slices.

pub mod palette;
pub mod scrollbar;
pub mod text;

pub use palette::Palette;
pub use scrollbar::Scrollbar;
