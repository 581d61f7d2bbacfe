//! Terminal color theme
//!
//! Colors are applied with crossterm's styling. A plain theme writes
//! unstyled text; it is picked when stdout is not a terminal or when
//! `NO_COLOR` is set.

use crossterm::style::{Color, Stylize};

/// Color theme for the line-based front end.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Emit escape sequences at all
    pub enabled: bool,

    /// Primary foreground text
    pub text: Color,
    /// Hints and secondary lines
    pub text_dim: Color,
    /// Room headers
    pub header: Color,
    /// Room features and exits
    pub accent: Color,
    /// Prompts asking for input
    pub prompt: Color,
    /// Items obtained, victories
    pub good: Color,
    /// Failed actions
    pub bad: Color,
    /// Pursuer activity, losses
    pub alarm: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            enabled: true,
            text: Color::White,
            text_dim: Color::DarkGrey,
            header: Color::Cyan,
            accent: Color::Yellow,
            prompt: Color::Green,
            good: Color::Green,
            bad: Color::Red,
            alarm: Color::Magenta,
        }
    }

    /// No styling
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::dark()
        }
    }

    /// Colored unless `NO_COLOR` is set or the output is not a terminal
    pub fn detect(is_terminal: bool) -> Self {
        if !is_terminal || std::env::var_os("NO_COLOR").is_some() {
            Self::plain()
        } else {
            Self::dark()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
