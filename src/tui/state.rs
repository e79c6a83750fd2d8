//! Application state management.

use std::collections::BTreeSet;

use ratatui::widgets::TableState as RatatuiTableState;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the table.
    #[default]
    Normal,
    /// Keys are typed into the student name field.
    NameEntry,
}

/// Severity of a notification popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Modal message that must be dismissed.
    Notification { kind: NoticeKind, message: String },
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// UI state: cursor, multi-row selection, name field and popups.
///
/// Row indices refer to the session table, which never removes rows.
#[derive(Debug, Default)]
pub struct AppState {
    /// Number of rows in the table being shown.
    pub row_count: usize,
    /// Cursor row.
    pub cursor: usize,
    /// Rows picked for the next marking action.
    pub selected: BTreeSet<usize>,
    pub input_mode: InputMode,
    /// Contents of the student name field.
    pub name_input: String,
    pub popup: PopupState,
    /// One-line feedback shown in the footer until the next key press.
    pub status_message: Option<String>,
    pub ratatui_state: RatatuiTableState,
}

impl AppState {
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            ..Self::default()
        }
    }

    /// Updates the row count after the table grew.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.selected.retain(|&i| i < row_count);
        self.clamp_cursor();
    }

    pub fn select_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
        self.clamp_cursor();
    }

    pub fn page_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    pub fn page_down(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
        self.clamp_cursor();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.row_count.saturating_sub(1);
    }

    /// Adds or removes the cursor row from the selection.
    pub fn toggle_selected(&mut self) {
        if self.cursor >= self.row_count {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.row_count).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    /// Opens a modal notification.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.popup = PopupState::Notification {
            kind,
            message: message.into(),
        };
    }

    /// Syncs the ratatui table state with the cursor before rendering.
    pub fn sync_table_state(&mut self) {
        self.clamp_cursor();
        if self.row_count == 0 {
            self.ratatui_state.select(None);
        } else {
            self.ratatui_state.select(Some(self.cursor));
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.row_count {
            self.cursor = self.row_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_inside_table() {
        let mut state = AppState::new(3);
        state.select_up();
        assert_eq!(state.cursor, 0);

        state.page_down(20);
        assert_eq!(state.cursor, 2);
        state.select_down();
        assert_eq!(state.cursor, 2);

        state.home();
        assert_eq!(state.cursor, 0);
        state.end();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn toggle_builds_multi_selection() {
        let mut state = AppState::new(3);
        state.toggle_selected();
        state.select_down();
        state.select_down();
        state.toggle_selected();
        assert_eq!(state.selected, BTreeSet::from([0, 2]));

        state.toggle_selected();
        assert_eq!(state.selected, BTreeSet::from([0]));
    }

    #[test]
    fn toggle_on_empty_table_selects_nothing() {
        let mut state = AppState::new(0);
        state.toggle_selected();
        assert!(state.selected.is_empty());
        state.sync_table_state();
        assert_eq!(state.ratatui_state.selected(), None);
    }

    #[test]
    fn select_all_and_clear() {
        let mut state = AppState::new(4);
        state.select_all();
        assert_eq!(state.selected.len(), 4);
        state.clear_selection();
        assert!(state.selected.is_empty());
    }

    #[test]
    fn growing_table_keeps_selection() {
        let mut state = AppState::new(2);
        state.select_all();
        state.set_row_count(3);
        assert_eq!(state.selected, BTreeSet::from([0, 1]));
    }
}
