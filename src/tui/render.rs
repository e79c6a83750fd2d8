//! Main rendering logic for TUI.

use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::attendance::AttendanceTable;

use super::state::{AppState, PopupState};
use super::widgets::{
    render_footer, render_header, render_help, render_name_input, render_notification,
    render_quit_confirm, render_records,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState, table: &AttendanceTable, today: NaiveDate) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Records
        Constraint::Length(3), // Name input
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state, table, today);
    render_records(frame, chunks[1], state, table);
    render_name_input(frame, chunks[2], state);
    render_footer(frame, chunks[3], state);

    // Popups are rendered last to overlay everything
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::Notification { kind, message } => {
            render_notification(frame, area, *kind, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::MemoryRoster;
    use crate::tui::state::NoticeKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn renders_records_and_selection_marker() {
        let mut roster = MemoryRoster::new();
        let mut table = AttendanceTable::new();
        table.add_student("Alice", &mut roster).unwrap();
        table.add_student("Bob", &mut roster).unwrap();
        let mut state = AppState::new(table.len());
        state.toggle_selected();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, &mut state, &table, day()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Student Name"));
        assert!(text.contains("[x] Alice"));
        assert!(text.contains("[ ] Bob"));
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("1 selected"));
    }

    #[test]
    fn renders_notification_over_table() {
        let table = AttendanceTable::new();
        let mut state = AppState::new(0);
        state.notify(NoticeKind::Error, "Please select students.");

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, &mut state, &table, day()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Error"));
        assert!(text.contains("Please select students."));
    }
}
