//! Roster storage: the list of known student names.
//!
//! The `RosterStore` trait lets the attendance table persist new names to
//! the real roster file in production and to an in-memory store in tests.

mod file;
pub mod memory;

pub use file::FileRoster;
pub use memory::MemoryRoster;

use crate::error::StoreError;

/// Persistent list of student names, one entry per student.
pub trait RosterStore {
    /// Reads every stored name in file order.
    ///
    /// A store that does not exist yet is an empty roster, not an error.
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Adds `name` after the existing entries without touching them.
    fn append(&mut self, name: &str) -> Result<(), StoreError>;
}
