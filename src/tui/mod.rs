//! Terminal User Interface for taking attendance.
//!
//! One screen: the attendance table, a student name field and a key-hint
//! footer. Every command runs on the UI thread against the session.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
