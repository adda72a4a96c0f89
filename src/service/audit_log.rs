use crate::models::backup_record::BackupRecord;
use crate::models::error::{RetentionError, Result};
use chrono::SecondsFormat;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One audit line. The layout is consumed by downstream tooling and must not change.
pub fn format_line(record: &BackupRecord) -> String {
    format!(
        "Nome: {} | Tamanho: {} bytes | Criado: {} | Última modificação: {}\n",
        record.name,
        record.size_bytes,
        record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        record.modified_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Writes one line per record, in order. Stops at the first failed write.
pub fn write_records<W: Write>(records: &[BackupRecord], sink: &mut W) -> io::Result<()> {
    for record in records {
        sink.write_all(format_line(record).as_bytes())?;
    }
    sink.flush()
}

/// Replaces the file at `log_path` with a report of `records`.
pub fn write_log(records: &[BackupRecord], log_path: &Path) -> Result<()> {
    let to_log_error = |cause: io::Error| RetentionError::LogWrite {
        path: log_path.to_path_buf(),
        cause,
    };

    let file = File::create(log_path).map_err(to_log_error)?;
    let mut writer = BufWriter::new(file);
    write_records(records, &mut writer).map_err(to_log_error)?;

    debug!("Wrote {} lines to {}", records.len(), log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record_at;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_line_layout() {
        let record = record_at("a.bak", 1024, "2024-06-09T12:00:00Z", "2024-06-09T13:30:00-03:00");

        assert_eq!(
            format_line(&record),
            "Nome: a.bak | Tamanho: 1024 bytes | Criado: 2024-06-09T12:00:00Z | Última modificação: 2024-06-09T13:30:00-03:00\n"
        );
    }

    #[test]
    fn test_fractional_seconds_are_dropped() {
        let record = record_at("a.bak", 1, "2024-06-09T12:00:00.750Z", "2024-06-09T12:00:00Z");
        assert!(format_line(&record).contains("Criado: 2024-06-09T12:00:00Z |"));
    }

    #[test]
    fn test_write_log_overwrites_previous_report() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("backups.log");
        fs::write(&log_path, "old line 1\nold line 2\nold line 3\n").unwrap();

        let records = vec![
            record_at("b.bak", 5, "2024-06-01T00:00:00Z", "2024-06-01T00:00:00Z"),
            record_at("a.bak", 7, "2024-06-02T00:00:00Z", "2024-06-03T00:00:00Z"),
        ];
        write_log(&records, &log_path).unwrap();

        let contents = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Nome: b.bak |"));
        assert!(lines[1].starts_with("Nome: a.bak |"));
    }

    #[test]
    fn test_empty_set_creates_empty_log() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("empty.log");

        write_log(&[], &log_path).unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_unwritable_destination_is_log_error() {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("missing-dir").join("backups.log");

        match write_log(&[], &log_path) {
            Err(RetentionError::LogWrite { path, .. }) => assert_eq!(path, log_path),
            other => panic!("Expected LogWrite error, got {:?}", other),
        }
    }

    struct FailAfter {
        written: Vec<u8>,
        writes_left: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "device full"));
            }
            self.writes_left -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stops_at_first_write_error() {
        let records = vec![
            record_at("1.bak", 1, "2024-06-01T00:00:00Z", "2024-06-01T00:00:00Z"),
            record_at("2.bak", 1, "2024-06-01T00:00:00Z", "2024-06-01T00:00:00Z"),
            record_at("3.bak", 1, "2024-06-01T00:00:00Z", "2024-06-01T00:00:00Z"),
        ];
        let mut sink = FailAfter {
            written: Vec::new(),
            writes_left: 1,
        };

        let err = write_records(&records, &mut sink).unwrap_err();

        assert_eq!(err.to_string(), "device full");
        let written = String::from_utf8(sink.written).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.starts_with("Nome: 1.bak"));
    }
}
