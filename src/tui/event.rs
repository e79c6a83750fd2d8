//! Event handling for TUI.
//!
//! Events are read on the UI thread; there is no tick, the screen only
//! changes in response to input.

use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize; the next draw picks up the new size.
    Resize,
}

/// Blocks until the next event the application cares about.
pub fn next_event() -> io::Result<Event> {
    loop {
        match event::read()? {
            // Some platforms report releases too; act on presses only.
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                return Ok(Event::Key(key));
            }
            CrosstermEvent::Resize(_, _) => return Ok(Event::Resize),
            _ => continue,
        }
    }
}
