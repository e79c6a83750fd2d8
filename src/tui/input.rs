//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, PopupState};

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 20;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Add the student typed into the name field.
    AddStudent,
    /// Mark the selected rows present.
    MarkPresent,
    /// Mark the selected rows absent.
    MarkAbsent,
    /// Write the table to the export file.
    Save,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Notification { .. } => return handle_notification(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::None => {}
    }

    state.status_message = None;
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::NameEntry => handle_name_entry(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Notifications are modal: only dismissal keys are accepted.
fn handle_notification(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        state.popup = PopupState::None;
    }
    KeyAction::None
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            state.popup = PopupState::None;
        }
        // Clamped during render
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_down();
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.page_up(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.page_down(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::Home => {
            state.home();
            KeyAction::None
        }
        KeyCode::End => {
            state.end();
            KeyAction::None
        }

        // Selection
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.select_all();
            KeyAction::None
        }
        KeyCode::Char(' ') => {
            state.toggle_selected();
            KeyAction::None
        }
        KeyCode::Esc => {
            state.clear_selection();
            KeyAction::None
        }

        // Commands
        KeyCode::Char('a') | KeyCode::Char('i') => {
            state.input_mode = InputMode::NameEntry;
            KeyAction::None
        }
        KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::MarkPresent,
        KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::MarkAbsent,
        KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Save,
        _ => KeyAction::None,
    }
}

/// Handles keys while typing a student name.
fn handle_name_entry(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Enter => KeyAction::AddStudent,
        KeyCode::Backspace => {
            state.name_input.pop();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            // Ignore control/alt-modified chars
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return KeyAction::None;
            }
            state.name_input.push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::NoticeKind;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = AppState::new(0);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert!(matches!(state.popup, PopupState::QuitConfirm));

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert!(matches!(state.popup, PopupState::None));
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = AppState::new(0);

        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Esc));

        assert_eq!(action, KeyAction::None);
        assert!(matches!(state.popup, PopupState::None));
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = AppState::new(0);
        state.input_mode = InputMode::NameEntry;
        assert_eq!(handle_key(&mut state, ctrl('c')), KeyAction::Quit);
    }

    #[test]
    fn command_keys_map_to_actions() {
        let mut state = AppState::new(2);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('p'))),
            KeyAction::MarkPresent
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('x'))),
            KeyAction::MarkAbsent
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('s'))),
            KeyAction::Save
        );
    }

    #[test]
    fn space_and_navigation_build_selection() {
        let mut state = AppState::new(3);

        let _ = handle_key(&mut state, key(KeyCode::Char(' ')));
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Char('j')));
        let _ = handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(state.is_selected(0));
        assert!(!state.is_selected(1));
        assert!(state.is_selected(2));

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.selected.is_empty());

        let _ = handle_key(&mut state, ctrl('a'));
        assert_eq!(state.selected.len(), 3);
    }

    #[test]
    fn name_entry_collects_text_and_submits_on_enter() {
        let mut state = AppState::new(0);

        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.input_mode, InputMode::NameEntry);

        for c in "Bobb".chars() {
            let _ = handle_key(&mut state, key(KeyCode::Char(c)));
        }
        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.name_input, "Bob");

        // Command keys are plain text while typing.
        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(state.name_input, "Bobq");
        assert!(!state.popup.is_open());

        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            KeyAction::AddStudent
        );

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.name_input, "Bob");
    }

    #[test]
    fn notification_blocks_other_keys_until_dismissed() {
        let mut state = AppState::new(2);
        state.notify(NoticeKind::Error, "Please select students.");

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('s'))),
            KeyAction::None
        );
        let _ = handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cursor, 0);
        assert!(state.popup.is_open());

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.popup.is_open());
    }

    #[test]
    fn help_opens_scrolls_and_closes() {
        let mut state = AppState::new(0);

        let _ = handle_key(&mut state, key(KeyCode::Char('?')));
        let _ = handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn status_message_clears_on_next_key() {
        let mut state = AppState::new(1);
        state.status_message = Some("Added Bob".into());
        let _ = handle_key(&mut state, key(KeyCode::Down));
        assert!(state.status_message.is_none());
    }
}
