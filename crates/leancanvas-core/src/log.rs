//! Append-only feedback log: `<timestamp> - <level> - <message>`, one line per event.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FeedbackError, FeedbackResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File-backed log. The file is opened in append mode for each write and
/// closed again before returning.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self, message: &str) -> FeedbackResult<()> {
        self.append(LogLevel::Info, message)
    }

    pub fn error(&self, message: &str) -> FeedbackResult<()> {
        self.append(LogLevel::Error, message)
    }

    pub fn append(&self, level: LogLevel, message: &str) -> FeedbackResult<()> {
        let line = format_line(&chrono::Local::now(), level, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FeedbackError::Log {
                message: format!("failed to open {}: {}", self.path.display(), e),
            })?;
        file.write_all(line.as_bytes())
            .map_err(|e| FeedbackError::Log {
                message: format!("failed to write {}: {}", self.path.display(), e),
            })
    }
}

/// Render one log line, newline-terminated. Line breaks inside `message`
/// are escaped so every event stays on a single line.
pub fn format_line<Tz>(at: &chrono::DateTime<Tz>, level: LogLevel, message: &str) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let flat = message.replace('\r', "\\r").replace('\n', "\\n");
    format!("{} - {} - {}\n", at.format(TIMESTAMP_FORMAT), level, flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_matches_asctime_layout() {
        let at = chrono::Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
            .unwrap()
            + chrono::Duration::milliseconds(58);
        assert_eq!(
            format_line(&at, LogLevel::Info, "API 요청 시작"),
            "2025-03-14 09:26:53,058 - INFO - API 요청 시작\n"
        );
    }

    #[test]
    fn multiline_messages_stay_on_one_line() {
        let at = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let line = format_line(&at, LogLevel::Error, "first\nsecond\r\nthird");
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with("ERROR - first\\nsecond\\r\\nthird\n"));
    }

    #[test]
    fn append_creates_file_and_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("lean_canvas.log"));

        log.info("one").unwrap();
        log.error("two").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - INFO - one"));
        assert!(lines[1].ends_with(" - ERROR - two"));
    }

    #[test]
    fn unwritable_path_is_a_log_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("missing-dir").join("x.log"));
        assert!(matches!(log.info("x"), Err(FeedbackError::Log { .. })));
    }
}
