//! Student name input field.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

pub fn render_name_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.input_mode == InputMode::NameEntry;
    let border = if editing { Styles::accent() } else { Styles::dim() };
    let block = Block::default()
        .title(" Student Name ")
        .borders(Borders::ALL)
        .border_style(border);

    let line = if editing {
        Line::from(vec![
            Span::styled(state.name_input.as_str(), Styles::text_input()),
            Span::styled("█", Styles::accent()),
        ])
    } else if state.name_input.is_empty() {
        Line::from(Span::styled("press 'a' to type a name", Styles::dim()))
    } else {
        Line::from(Span::raw(state.name_input.as_str()))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
