//! rollcall - student attendance register.
//!
//! This library provides:
//! - `roster` - the persisted list of student names
//! - `attendance` - the in-memory attendance table
//! - `export` - the comma-delimited attendance snapshot
//! - `session` - command handlers tying the three together
//! - `tui` - the interactive terminal front end

pub mod attendance;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod roster;
pub mod session;
pub mod tui;
