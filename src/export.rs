//! Attendance export to a comma-delimited text file.
//!
//! Each record becomes `name,date,status,` followed by a newline. Fields are
//! written as-is: a comma inside a name is not quoted and will shift columns.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::StoreError;
use crate::model::StudentRecord;

/// Writes every record in table order to `writer`.
pub fn write_records<W: Write>(records: &[StudentRecord], writer: &mut W) -> io::Result<()> {
    for record in records {
        // Every field, including the last, is followed by a comma.
        writeln!(
            writer,
            "{},{},{},",
            record.name,
            record.date_text(),
            record.status
        )?;
    }
    Ok(())
}

/// Overwrites `path` with a snapshot of `records`.
pub fn export(records: &[StudentRecord], path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, &e))?;
    }

    let file = File::create(path).map_err(|e| StoreError::io(path, &e))?;
    let mut writer = BufWriter::new(file);
    write_records(records, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| StoreError::io(path, &e))?;

    info!(path = %path.display(), rows = records.len(), "attendance exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn marked(name: &str, status: Status) -> StudentRecord {
        let mut record = StudentRecord::new(name);
        record.mark(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), status);
        record
    }

    #[test]
    fn test_single_record_line_has_trailing_comma() {
        let mut out = Vec::new();
        write_records(&[marked("Bob", Status::Present)], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Bob,2024-01-01,Present,\n");
    }

    #[test]
    fn test_unmarked_record_has_empty_fields() {
        let mut out = Vec::new();
        write_records(&[StudentRecord::new("Carol")], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Carol,,,\n");
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attendance.csv");
        fs::write(&path, "stale,contents,here,\nmore,stale,rows,\n").unwrap();

        let records = vec![marked("Alice", Status::Absent), StudentRecord::new("Bob")];
        export(&records, &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Alice,2024-01-01,Absent,\nBob,,,\n"
        );
    }

    #[test]
    fn test_export_empty_table_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attendance.csv");
        fs::write(&path, "old,row,,\n").unwrap();

        export(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_export_to_directory_fails() {
        let dir = tempdir().unwrap();
        let err = export(&[StudentRecord::new("Bob")], dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
