//! Append-only audit log file
//!
//! Provides the AuditLogger struct that writes audit events to a log file.
//! Each event is written as a single JSON line and flushed immediately.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{MatreqError, MatreqResult};
use crate::models::RequestId;

use super::entry::AuditEvent;

/// Handles reading and writing the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit event.
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an audit event
    ///
    /// Each write is flushed immediately to ensure durability.
    pub fn log(&self, event: &AuditEvent) -> MatreqResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| MatreqError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(event)
            .map_err(|e| MatreqError::Json(format!("Failed to serialize audit event: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| MatreqError::Io(format!("Failed to write audit event: {}", e)))?;

        file.flush()
            .map_err(|e| MatreqError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit events in the order they were written (oldest first)
    pub fn read_all(&self) -> MatreqResult<Vec<AuditEvent>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| MatreqError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                MatreqError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let event: AuditEvent = serde_json::from_str(&line).map_err(|e| {
                MatreqError::Json(format!(
                    "Failed to parse audit event at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            events.push(event);
        }

        Ok(events)
    }

    /// Read the events of one request, oldest first
    pub fn read_for(&self, request_id: RequestId) -> MatreqResult<Vec<AuditEvent>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.request_id == request_id)
            .collect())
    }

    /// Remove every event of a deleted request
    ///
    /// The surviving events are rewritten to a temp file which then replaces
    /// the log, so a failure leaves the original log intact. Returns the
    /// number of events removed.
    pub fn purge_request(&self, request_id: RequestId) -> MatreqResult<usize> {
        let events = self.read_all()?;
        let before = events.len();
        let kept: Vec<_> = events
            .into_iter()
            .filter(|e| e.request_id != request_id)
            .collect();
        let removed = before - kept.len();

        if removed == 0 {
            return Ok(0);
        }

        let temp_path = self.log_path.with_extension("log.tmp");
        let file = File::create(&temp_path)
            .map_err(|e| MatreqError::Io(format!("Failed to create temp audit log: {}", e)))?;
        let mut writer = BufWriter::new(file);

        for event in &kept {
            let json = serde_json::to_string(event).map_err(|e| {
                MatreqError::Json(format!("Failed to serialize audit event: {}", e))
            })?;
            writeln!(writer, "{}", json)
                .map_err(|e| MatreqError::Io(format!("Failed to write audit event: {}", e)))?;
        }

        writer
            .flush()
            .map_err(|e| MatreqError::Io(format!("Failed to flush audit log: {}", e)))?;

        fs::rename(&temp_path, &self.log_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            MatreqError::Io(format!("Failed to replace audit log: {}", e))
        })?;

        Ok(removed)
    }

    /// Get the number of events in the audit log
    pub fn entry_count(&self) -> MatreqResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the audit log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::ActionKind;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    fn event_for(request_id: RequestId, label: &str) -> AuditEvent {
        AuditEvent::new(request_id, "kim", ActionKind::Update, label, "a", "b")
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let request_id = RequestId::new();

        logger.log(&event_for(request_id, "Plant")).unwrap();

        let events = logger.read_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, ActionKind::Update);
        assert_eq!(events[0].request_id, request_id);
    }

    #[test]
    fn test_read_for_filters_by_request() {
        let (logger, _temp) = create_test_logger();
        let first = RequestId::new();
        let second = RequestId::new();

        logger.log(&event_for(first, "A")).unwrap();
        logger.log(&event_for(second, "B")).unwrap();
        logger.log(&event_for(first, "C")).unwrap();

        let events = logger.read_for(first).unwrap();
        let labels: Vec<_> = events.iter().map(|e| e.field_label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn test_purge_request() {
        let (logger, _temp) = create_test_logger();
        let doomed = RequestId::new();
        let kept = RequestId::new();

        logger.log(&event_for(doomed, "A")).unwrap();
        logger.log(&event_for(kept, "B")).unwrap();
        logger.log(&event_for(doomed, "C")).unwrap();

        assert_eq!(logger.purge_request(doomed).unwrap(), 2);
        assert!(logger.read_for(doomed).unwrap().is_empty());
        assert_eq!(logger.read_for(kept).unwrap().len(), 1);
        assert_eq!(logger.purge_request(doomed).unwrap(), 0);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let logger = AuditLogger::new(blocker.join("audit.log"));
        let result = logger.log(&event_for(RequestId::new(), "A"));
        assert!(matches!(result, Err(MatreqError::Io(_))));
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger.log(&event_for(RequestId::new(), "A")).unwrap();

        let logger2 = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(logger2.read_all().unwrap().len(), 1);
    }
}
