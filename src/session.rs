//! Command handlers over one attendance session.
//!
//! A `Session` is built once at startup and handed to every command. It owns
//! the table, the roster store the table persists into, and the export path.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::attendance::AttendanceTable;
use crate::config::Config;
use crate::error::AttendanceError;
use crate::export;
use crate::model::{DATE_FORMAT, Status};
use crate::roster::{FileRoster, RosterStore};

/// A user action against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStudent(String),
    Mark(Status),
    Save,
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(String),
    Marked {
        count: usize,
        status: Status,
        date: NaiveDate,
    },
    Saved {
        rows: usize,
        path: PathBuf,
    },
}

impl Outcome {
    /// Short message for the status line or notification popup.
    pub fn message(&self) -> String {
        match self {
            Outcome::Added(name) => format!("Added {}", name),
            Outcome::Marked {
                count,
                status,
                date,
            } => format!(
                "Marked {} student{} {} on {}",
                count,
                if *count == 1 { "" } else { "s" },
                status,
                date.format(DATE_FORMAT)
            ),
            Outcome::Saved { rows, path } => {
                format!("Attendance saved ({} rows to {}).", rows, path.display())
            }
        }
    }
}

/// Table plus the stores it reads from and writes to.
pub struct Session {
    table: AttendanceTable,
    roster: Box<dyn RosterStore>,
    export_path: PathBuf,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Session {
    /// Creates an empty session; call [`Session::load_roster`] to populate it.
    pub fn new(roster: Box<dyn RosterStore>, export_path: impl AsRef<Path>) -> Self {
        Self {
            table: AttendanceTable::new(),
            roster,
            export_path: export_path.as_ref().to_path_buf(),
            clock: local_today,
        }
    }

    /// Opens the file-backed session described by `config`.
    ///
    /// A roster that cannot be read does not prevent startup: the session
    /// starts empty and the error is returned for the caller to report.
    pub fn open(config: &Config) -> (Self, Option<AttendanceError>) {
        let roster = FileRoster::new(config.roster_path());
        let mut session = Self::new(Box::new(roster), config.export_path());
        let err = session.load_roster().err();
        (session, err)
    }

    /// Replaces the date source used by marking actions.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the table with the contents of the roster store.
    pub fn load_roster(&mut self) -> Result<usize, AttendanceError> {
        let names = self.roster.load().inspect_err(|e| {
            warn!(error = %e, "failed to load roster");
        })?;
        let (table, skipped) = AttendanceTable::from_roster(names);
        if skipped > 0 {
            debug!(skipped, "roster lines skipped");
        }
        info!(students = table.len(), "roster loaded");
        self.table = table;
        Ok(self.table.len())
    }

    pub fn table(&self) -> &AttendanceTable {
        &self.table
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Runs one command. `selection` holds row indices and is only used by
    /// marking.
    pub fn execute(
        &mut self,
        command: Command,
        selection: &BTreeSet<usize>,
    ) -> Result<Outcome, AttendanceError> {
        let result = match command {
            Command::AddStudent(name) => self
                .table
                .add_student(&name, &mut *self.roster)
                .map(Outcome::Added),
            Command::Mark(status) => {
                // One date for the whole marking action.
                let date = (self.clock)();
                self.table
                    .mark_attendance(selection, status, date)
                    .map(|count| Outcome::Marked {
                        count,
                        status,
                        date,
                    })
            }
            Command::Save => export::export(self.table.records(), &self.export_path)
                .map(|()| Outcome::Saved {
                    rows: self.table.len(),
                    path: self.export_path.clone(),
                })
                .map_err(AttendanceError::from),
        };

        match &result {
            Ok(outcome) => debug!(outcome = %outcome.message(), "command applied"),
            Err(e) if e.is_validation() => debug!(error = %e, "command rejected"),
            Err(e) => warn!(error = %e, "command failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::MemoryRoster;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tempfile::tempdir;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    // Only read by `test_mark_uses_one_date_for_all_rows`.
    static MARK_CLOCK_CALLS: AtomicU32 = AtomicU32::new(0);

    fn counting_day() -> NaiveDate {
        MARK_CLOCK_CALLS.fetch_add(1, Ordering::SeqCst);
        fixed_day()
    }

    fn session_with(names: &[&str], export_path: &Path) -> Session {
        let roster = MemoryRoster::with_names(names.iter().copied());
        let mut session = Session::new(Box::new(roster), export_path).with_clock(fixed_day);
        session.load_roster().unwrap();
        session
    }

    #[test]
    fn test_open_with_missing_roster_starts_empty() {
        let dir = tempdir().unwrap();
        let (session, err) = Session::open(&Config::with_resource_dir(dir.path()));
        assert!(err.is_none());
        assert!(session.table().is_empty());
    }

    #[test]
    fn test_open_reports_unreadable_roster() {
        let dir = tempdir().unwrap();
        let config = Config::with_resource_dir(dir.path());
        fs::create_dir_all(config.roster_path()).unwrap();

        let (session, err) = Session::open(&config);

        assert!(matches!(err, Some(AttendanceError::Io(_))));
        assert!(session.table().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_previous_table() {
        let roster = MemoryRoster::with_names(["Alice", "Bob"]).failing_load_after(1);
        let mut session = Session::new(Box::new(roster), "unused.csv");
        assert_eq!(session.load_roster(), Ok(2));

        assert!(session.load_roster().is_err());
        assert_eq!(session.table().len(), 2);
        assert!(session.table().contains("Bob"));
    }

    #[test]
    fn test_mark_uses_one_date_for_all_rows() {
        let mut session =
            session_with(&["a", "b", "c"], Path::new("unused.csv")).with_clock(counting_day);
        let selection: BTreeSet<usize> = [0, 1, 2].into_iter().collect();

        let before = MARK_CLOCK_CALLS.load(Ordering::SeqCst);
        let outcome = session
            .execute(Command::Mark(Status::Present), &selection)
            .unwrap();
        assert_eq!(MARK_CLOCK_CALLS.load(Ordering::SeqCst) - before, 1);

        assert_eq!(
            outcome,
            Outcome::Marked {
                count: 3,
                status: Status::Present,
                date: fixed_day()
            }
        );
        assert_eq!(outcome.message(), "Marked 3 students Present on 2024-01-01");
        for record in session.table().records() {
            assert_eq!(record.date, Some(fixed_day()));
        }
    }

    #[test]
    fn test_full_flow_against_files() {
        let dir = tempdir().unwrap();
        let config = Config::with_resource_dir(dir.path().join("resources"));
        let (session, err) = Session::open(&config);
        assert!(err.is_none());
        let mut session = session.with_clock(fixed_day);
        let none = BTreeSet::new();

        session
            .execute(Command::AddStudent("Bob".into()), &none)
            .unwrap();
        session
            .execute(Command::AddStudent("Alice".into()), &none)
            .unwrap();
        let dup = session.execute(Command::AddStudent("Bob".into()), &none);
        assert_eq!(dup, Err(AttendanceError::AlreadyExists("Bob".into())));

        let first: BTreeSet<usize> = [0].into_iter().collect();
        session
            .execute(Command::Mark(Status::Present), &first)
            .unwrap();
        let saved = session.execute(Command::Save, &none).unwrap();

        assert_eq!(
            saved,
            Outcome::Saved {
                rows: 2,
                path: config.export_path()
            }
        );
        assert_eq!(
            fs::read_to_string(config.roster_path()).unwrap(),
            "Bob\nAlice\n"
        );
        assert_eq!(
            fs::read_to_string(config.export_path()).unwrap(),
            "Bob,2024-01-01,Present,\nAlice,,,\n"
        );

        // Reopening restores names but not marks.
        let (reopened, _) = Session::open(&config);
        assert_eq!(reopened.table().len(), 2);
        assert_eq!(reopened.table().get(0).unwrap().status, Status::Unset);
    }

    #[test]
    fn test_mark_without_selection_is_rejected() {
        let mut session = session_with(&["a"], Path::new("unused.csv"));
        let err = session
            .execute(Command::Mark(Status::Absent), &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err, AttendanceError::NoSelection);
    }
}
