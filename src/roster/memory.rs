//! In-memory roster used in tests and demos.

use std::cell::Cell;
use std::path::PathBuf;

use super::RosterStore;
use crate::error::StoreError;

/// Roster held in a `Vec`, optionally primed to fail like a broken disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    names: Vec<String>,
    /// Number of loads that succeed before every later one fails.
    fail_load_after: Option<usize>,
    loads: Cell<usize>,
    fail_append: bool,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already contains `names`.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail.
    pub fn failing_load(self) -> Self {
        self.failing_load_after(0)
    }

    /// Lets the first `successes` loads through, then fails the rest.
    pub fn failing_load_after(mut self, successes: usize) -> Self {
        self.fail_load_after = Some(successes);
        self
    }

    /// Makes every subsequent `append` fail.
    pub fn failing_append(mut self) -> Self {
        self.fail_append = true;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn failure(message: &str) -> StoreError {
        StoreError::Io {
            path: PathBuf::from("<memory>"),
            message: message.to_string(),
        }
    }
}

impl RosterStore for MemoryRoster {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let attempt = self.loads.get();
        self.loads.set(attempt + 1);
        if self.fail_load_after.is_some_and(|n| attempt >= n) {
            return Err(Self::failure("load failed"));
        }
        Ok(self.names.clone())
    }

    fn append(&mut self, name: &str) -> Result<(), StoreError> {
        if self.fail_append {
            return Err(Self::failure("append failed"));
        }
        self.names.push(name.to_string());
        Ok(())
    }
}
