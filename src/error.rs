//! Error types shared by the roster store, the attendance table and the exporter.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised by file-backed storage (roster file, attendance export).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The file exists but could not be read, or could not be written.
    Io { path: PathBuf, message: String },
}

impl StoreError {
    pub fn io(path: &Path, err: &io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, message } => {
                write!(f, "I/O error on '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Outcome of a rejected attendance command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// Student name is empty or whitespace only.
    Empty,
    /// A student with exactly this name is already on the roster.
    AlreadyExists(String),
    /// Marking was requested without any selected rows.
    NoSelection,
    /// Selection refers to a row that does not exist.
    RowOutOfRange(usize),
    /// Roster or export file could not be accessed.
    Io(StoreError),
}

impl AttendanceError {
    /// Returns true for rejections caused by user input rather than the filesystem.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AttendanceError::Io(_))
    }
}

impl fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceError::Empty => write!(f, "Please enter a student name."),
            AttendanceError::AlreadyExists(name) => {
                write!(f, "Student '{}' already exists.", name)
            }
            AttendanceError::NoSelection => write!(f, "Please select students."),
            AttendanceError::RowOutOfRange(index) => {
                write!(f, "Row {} is not in the table.", index + 1)
            }
            AttendanceError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AttendanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttendanceError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AttendanceError {
    fn from(err: StoreError) -> Self {
        AttendanceError::Io(err)
    }
}
