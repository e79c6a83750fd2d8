//! Location of the roster and export files.

use std::path::{Path, PathBuf};

/// Default directory holding both data files.
pub const DEFAULT_RESOURCE_DIR: &str = "resources";
/// Default roster file name (one student per line).
pub const DEFAULT_ROSTER_FILE: &str = "students.txt";
/// Default attendance export file name.
pub const DEFAULT_EXPORT_FILE: &str = "attendance.csv";

/// File layout used by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub resource_dir: PathBuf,
    pub roster_file: String,
    pub export_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            roster_file: DEFAULT_ROSTER_FILE.to_string(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Creates a config rooted at `resource_dir` with default file names.
    pub fn with_resource_dir(resource_dir: impl AsRef<Path>) -> Self {
        Self {
            resource_dir: resource_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn roster_path(&self) -> PathBuf {
        self.resource_dir.join(&self.roster_file)
    }

    pub fn export_path(&self) -> PathBuf {
        self.resource_dir.join(&self.export_file)
    }
}
