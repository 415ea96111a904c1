//! Append-only audit log writer
//!
//! Each entry is one JSON line, flushed as soon as it is written.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::entry::{AuditEntry, EntityType};

/// Writes and reads the JSONL audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> FintrackResult<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FintrackError::Io(format!("Failed to create audit log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FintrackError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FintrackError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| FintrackError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> FintrackResult<Vec<AuditEntry>> {
        self.lines()?
            .into_iter()
            .map(|(number, line)| {
                serde_json::from_str(&line).map_err(|e| {
                    FintrackError::Json(format!("Bad audit entry on line {}: {}", number, e))
                })
            })
            .collect()
    }

    /// Newest entries first, optionally for one entity type, at most `limit`
    pub fn recent(
        &self,
        entity_type: Option<EntityType>,
        limit: usize,
    ) -> FintrackResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        Ok(entries
            .into_iter()
            .filter(|e| entity_type.map_or(true, |t| e.entity_type == t))
            .take(limit)
            .collect())
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> FintrackResult<usize> {
        Ok(self.lines()?.len())
    }

    /// Non-blank lines with their 1-based line numbers; a missing file is empty
    fn lines(&self) -> FintrackResult<Vec<(usize, String)>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut lines = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                FintrackError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if !line.trim().is_empty() {
                lines.push((index + 1, line));
            }
        }
        Ok(lines)
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(
            EntityType::Transaction,
            "id-1",
            Some("Salary".to_string()),
            &json!({"description": "Salary"}),
        );

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Salary"));
    }

    #[test]
    fn test_appends_in_order() {
        let (logger, temp) = create_test_logger();

        for i in 0..4 {
            let entry = AuditEntry::create(EntityType::Investment, format!("inv-{}", i), None, &i);
            logger.log(&entry).unwrap();
        }
        logger
            .log(&AuditEntry::delete(EntityType::Transaction, "txn-9", None, &9))
            .unwrap();

        // A fresh logger on the same file sees everything
        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.entry_count().unwrap(), 5);

        let entries = reopened.read_all().unwrap();
        assert_eq!(entries[0].entity_id, "inv-0");
        assert_eq!(entries[4].operation, Operation::Delete);
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("nested").join("audit.log"));

        logger
            .log(&AuditEntry::create(EntityType::Transaction, "id", None, &1))
            .unwrap();
        assert!(logger.path().exists());
    }

    #[test]
    fn test_recent_is_newest_first_and_filtered() {
        let (logger, _temp) = create_test_logger();
        for i in 0..3 {
            logger
                .log(&AuditEntry::create(EntityType::Transaction, format!("t{}", i), None, &i))
                .unwrap();
        }
        logger
            .log(&AuditEntry::create(EntityType::Investment, "i0", None, &0))
            .unwrap();

        let recent = logger.recent(None, 2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "i0");
        assert_eq!(recent[1].entity_id, "t2");

        let transactions = logger.recent(Some(EntityType::Transaction), 10).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].entity_id, "t2");
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(EntityType::Transaction, "ok", None, &1))
            .unwrap();
        let mut file = OpenOptions::new().append(true).open(logger.path()).unwrap();
        writeln!(file, "not json").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }
}
