//! Footer line: last command feedback or key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(msg) = &state.status_message {
        frame.render_widget(Paragraph::new(msg.as_str()).style(Styles::marked_row()), area);
        return;
    }

    let hints: &[(&str, &str)] = match state.input_mode {
        InputMode::NameEntry => &[("Enter", "add student"), ("Esc", "back")],
        InputMode::Normal => &[
            ("a", "add"),
            ("Space", "select"),
            ("p", "present"),
            ("x", "absent"),
            ("s", "save"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(" {} ", label), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
