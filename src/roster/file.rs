//! Line-oriented roster file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::RosterStore;
use crate::error::StoreError;

/// Roster kept in a text file, one name per line, no header.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for FileRoster {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "roster file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, &e)),
        };

        let mut names = Vec::new();
        for line in BufReader::new(file).split(b'\n') {
            let mut bytes = line.map_err(|e| StoreError::io(&self.path, &e))?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            // Hand-edited rosters may use a legacy encoding; keep the row.
            let name = match String::from_utf8(bytes) {
                Ok(name) => name,
                Err(e) => {
                    let name = String::from_utf8_lossy(e.as_bytes()).into_owned();
                    warn!(path = %self.path.display(), name = %name, "roster line is not valid UTF-8");
                    name
                }
            };
            names.push(name);
        }

        debug!(path = %self.path.display(), count = names.len(), "roster loaded");
        Ok(names)
    }

    fn append(&mut self, name: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, &e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, &e))?;
        writeln!(file, "{}", name).map_err(|e| StoreError::io(&self.path, &e))?;

        info!(path = %self.path.display(), name, "student appended to roster");
        Ok(())
    }
}
