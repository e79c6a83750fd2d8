//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Status;

/// Color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Attendance colors
    pub const PRESENT: Color = Color::Green;
    pub const ABSENT: Color = Color::Red;
    pub const MARKED: Color = Color::Yellow;

    pub const ACCENT: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Rows picked for the next marking action.
    pub fn marked_row() -> Style {
        Style::default().fg(Theme::MARKED)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Attendance status cell style.
    pub fn status(status: Status) -> Style {
        match status {
            Status::Present => Style::default().fg(Theme::PRESENT),
            Status::Absent => Style::default()
                .fg(Theme::ABSENT)
                .add_modifier(Modifier::BOLD),
            Status::Unset => Self::dim(),
        }
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Popup and focused input border.
    pub fn accent() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Error popup border and text.
    pub fn error() -> Style {
        Style::default().fg(Theme::ABSENT)
    }

    /// Name input style.
    pub fn text_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Key names inside popups.
    pub fn popup_key() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
