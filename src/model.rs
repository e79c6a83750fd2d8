//! Attendance data model.

use std::fmt;

use chrono::NaiveDate;

/// Date format used on screen and in the export file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Attendance status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Present,
    Absent,
    /// Not marked yet in this session.
    #[default]
    Unset,
}

impl Status {
    /// Text form used in the table and the export file. `Unset` is empty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
            Status::Unset => "",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the attendance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub status: Status,
}

impl StudentRecord {
    /// Creates an unmarked record for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
            status: Status::Unset,
        }
    }

    /// Date as `YYYY-MM-DD`, or empty when the record was never marked.
    pub fn date_text(&self) -> String {
        self.date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Stamps the record with a marking action.
    pub fn mark(&mut self, date: NaiveDate, status: Status) {
        self.date = Some(date);
        self.status = status;
    }
}

/// Per-status counts over the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub present: usize,
    pub absent: usize,
    pub unset: usize,
}

impl Tally {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a StudentRecord>) -> Self {
        records
            .into_iter()
            .fold(Tally::default(), |mut tally, record| {
                match record.status {
                    Status::Present => tally.present += 1,
                    Status::Absent => tally.absent += 1,
                    Status::Unset => tally.unset += 1,
                }
                tally
            })
    }
}
