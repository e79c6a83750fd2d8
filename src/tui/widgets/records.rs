//! Attendance records table widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::attendance::AttendanceTable;
use crate::tui::state::AppState;
use crate::tui::style::Styles;

const HEADERS: [&str; 4] = ["", "Student Name", "Date", "Attendance Status"];

pub fn render_records(frame: &mut Frame, area: Rect, state: &mut AppState, table: &AttendanceTable) {
    let block = Block::default()
        .title(" Attendance Records ")
        .borders(Borders::ALL)
        .style(Styles::default());

    if table.is_empty() {
        let msg = Paragraph::new("No students yet. Press 'a' to add one.")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    state.sync_table_state();

    let header = Row::new(
        HEADERS
            .iter()
            .map(|h| Span::styled(*h, Styles::table_header())),
    )
    .style(Styles::table_header());

    let rows: Vec<Row> = table
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let picked = state.is_selected(i);
            let marker = if picked { "[x]" } else { "[ ]" };
            let style = if picked {
                Styles::marked_row()
            } else {
                Styles::default()
            };
            Row::new(vec![
                Span::raw(marker),
                Span::raw(record.name.clone()),
                Span::raw(record.date_text()),
                Span::styled(record.status.as_str(), Styles::status(record.status)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Length(10),
        Constraint::Fill(1),
    ];

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(widget, area, &mut state.ratatui_state);
}
