//! Theme palettes.
//!
//! Maps a `Theme` to concrete terminal colors. Every render path reads colors
//! from here so a theme change recolors the whole screen in one frame.

use ratatui::style::Color;
use termfolio_core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub prompt: Color,
    pub strong: Color,
    pub code: Color,
    pub link: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::Green,
                prompt: Color::LightGreen,
                strong: Color::White,
                code: Color::Cyan,
                link: Color::LightBlue,
                muted: Color::DarkGray,
            },
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                prompt: Color::Blue,
                strong: Color::Black,
                code: Color::Magenta,
                link: Color::Blue,
                muted: Color::Gray,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_have_distinct_backgrounds() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.foreground, dark.background);
        assert_ne!(light.foreground, light.background);
    }
}
