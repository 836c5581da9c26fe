//! Colour palettes for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{Priority, Theme};

/// Screen colours for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    /// Text drawn on top of a priority tint.
    pub on_tint: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    foreground: Color::Rgb(34, 34, 34),
    muted: Color::Rgb(136, 136, 136),
    accent: Color::Rgb(0, 121, 107),
    on_tint: Color::Rgb(51, 51, 51),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(18, 18, 18),
    foreground: Color::Rgb(230, 230, 230),
    muted: Color::Rgb(120, 120, 120),
    accent: Color::Rgb(77, 208, 225),
    on_tint: Color::Rgb(235, 235, 235),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

/// Row background for a task card of the given priority.
pub fn priority_tint(priority: Priority, theme: Theme) -> Color {
    match (theme, priority) {
        (Theme::Light, Priority::Low) => Color::Rgb(224, 247, 250),
        (Theme::Light, Priority::Medium) => Color::Rgb(255, 224, 178),
        (Theme::Light, Priority::High) => Color::Rgb(255, 235, 238),
        (Theme::Dark, Priority::Low) => Color::Rgb(0, 60, 70),
        (Theme::Dark, Priority::Medium) => Color::Rgb(90, 55, 0),
        (Theme::Dark, Priority::High) => Color::Rgb(90, 20, 30),
    }
}
