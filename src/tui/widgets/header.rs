//! Header widget showing the date, roster size and tally.

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::attendance::AttendanceTable;
use crate::model::{DATE_FORMAT, Status};
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    table: &AttendanceTable,
    today: NaiveDate,
) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Title
        Constraint::Length(13), // Date
        Constraint::Min(20),    // Tally
        Constraint::Length(16), // Selection
    ])
    .split(area);

    frame.render_widget(Paragraph::new(" ROLLCALL ").style(Styles::header()), chunks[0]);

    let date = Paragraph::new(today.format(DATE_FORMAT).to_string()).style(Styles::header());
    frame.render_widget(date, chunks[1]);

    let tally = table.tally();
    let line = Line::from(vec![
        Span::styled(format!("{} students  ", table.len()), Styles::header()),
        Span::styled(
            format!("{} present", tally.present),
            Styles::status(Status::Present),
        ),
        Span::styled("  ", Styles::header()),
        Span::styled(
            format!("{} absent", tally.absent),
            Styles::status(Status::Absent),
        ),
        Span::styled(format!("  {} unmarked", tally.unset), Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::header()), chunks[2]);

    let selection = if state.selected.is_empty() {
        String::new()
    } else {
        format!("{} selected", state.selected.len())
    };
    frame.render_widget(Paragraph::new(selection).style(Styles::header()), chunks[3]);
}
