//! In-memory attendance table.
//!
//! Rows keep insertion order and are never removed during a session, so a
//! row index stays valid for the lifetime of the table.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::AttendanceError;
use crate::model::{Status, StudentRecord, Tally};
use crate::roster::RosterStore;

/// Ordered attendance records with unique student names.
#[derive(Debug, Clone, Default)]
pub struct AttendanceTable {
    records: Vec<StudentRecord>,
}

impl AttendanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from roster names.
    ///
    /// Blank lines and repeated names are skipped; returns the table and the
    /// number of skipped entries.
    pub fn from_roster<I, S>(names: I) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut skipped = 0;
        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                skipped += 1;
            } else if table.contains(name) {
                warn!(name, "duplicate roster entry skipped");
                skipped += 1;
            } else {
                table.records.push(StudentRecord::new(name));
            }
        }
        (table, skipped)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    /// Exact string comparison against every existing name.
    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    pub fn tally(&self) -> Tally {
        Tally::from_records(&self.records)
    }

    /// Adds a student and persists the name to `roster`.
    ///
    /// The name is trimmed before validation. The record is only added once
    /// the roster accepted the name, so a failed write leaves the table as is.
    /// Returns the stored (trimmed) name.
    pub fn add_student(
        &mut self,
        name: &str,
        roster: &mut dyn RosterStore,
    ) -> Result<String, AttendanceError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("rejected empty student name");
            return Err(AttendanceError::Empty);
        }
        if self.contains(name) {
            debug!(name, "rejected duplicate student name");
            return Err(AttendanceError::AlreadyExists(name.to_string()));
        }

        roster.append(name)?;
        self.records.push(StudentRecord::new(name));
        Ok(name.to_string())
    }

    /// Stamps every selected row with `date` and `status`.
    ///
    /// The whole selection is validated before any row changes. Returns the
    /// number of marked rows.
    pub fn mark_attendance(
        &mut self,
        selection: &BTreeSet<usize>,
        status: Status,
        date: NaiveDate,
    ) -> Result<usize, AttendanceError> {
        if selection.is_empty() {
            return Err(AttendanceError::NoSelection);
        }
        if let Some(&bad) = selection.iter().find(|&&i| i >= self.records.len()) {
            return Err(AttendanceError::RowOutOfRange(bad));
        }

        for &index in selection {
            self.records[index].mark(date, status);
        }
        Ok(selection.len())
    }
}
