//! Theme for the interactive dashboard.
//!
//! A `Theme` is a plain value held once in [`super::state::AppState`] and
//! passed by reference into every renderer. There is no process-global
//! style state.

use ratatui::style::Color;

/// Colors used across all views and widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,

    pub border: Color,
    pub border_focused: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub muted: Color,

    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    /// Background for the header and selected rows.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::quickspin_dark()
    }
}

impl Theme {
    /// Default dark palette.
    pub fn quickspin_dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 37),
            surface: Color::Rgb(30, 30, 46),

            border: Color::Rgb(69, 71, 90),
            border_focused: Color::Rgb(137, 180, 250),

            text: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            muted: Color::Rgb(108, 112, 134),

            primary: Color::Rgb(137, 180, 250),
            secondary: Color::Rgb(203, 166, 247),
            accent: Color::Rgb(148, 226, 213),

            success: Color::Rgb(166, 227, 161),
            warning: Color::Rgb(249, 226, 175),
            error: Color::Rgb(243, 139, 168),

            highlight: Color::Rgb(49, 50, 68),
        }
    }

    /// High-contrast palette for terminals without truecolor.
    pub fn ansi() -> Self {
        Self {
            bg: Color::Reset,
            surface: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            text: Color::White,
            text_secondary: Color::Gray,
            muted: Color::DarkGray,
            primary: Color::Blue,
            secondary: Color::Magenta,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            highlight: Color::DarkGray,
        }
    }
}
