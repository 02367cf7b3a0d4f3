use crate::handler::{DispatchResult, LogHandler};
use common::types::{LogMessage, Severity};
use log::{debug, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends errors to a file, one per line.
///
/// The file is opened for every message and closed again right after. If it cannot be opened the
/// message is still considered consumed.
pub struct ErrorHandler {
    path: PathBuf,
}

impl ErrorHandler {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn append(&self, text: &str) {
        let mut file = match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                debug!(target: "handlers", "Skipping write, could not open '{:?}': {}", self.path, err);
                return;
            }
        };

        if let Err(err) = writeln!(file, "{}", text) {
            warn!(target: "handlers", "Could not write to '{:?}': {}", self.path, err);
        }
    }
}

impl LogHandler for ErrorHandler {
    fn name(&self) -> &'static str {
        "ErrorHandler"
    }

    fn process(&mut self, message: &LogMessage) -> DispatchResult<bool> {
        if message.severity() != Severity::Error {
            return Ok(false);
        }

        self.append(message.text());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata, Record};
    use std::fs;
    use std::sync::Mutex;

    static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    struct RecordingLogger;

    impl Log for RecordingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger;

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.txt");
        fs::write(&path, "earlier\n").unwrap();
        let mut handler = ErrorHandler::new(&path);

        assert!(handler.process(&LogMessage::new(Severity::Error, "Error message")).unwrap());
        assert!(handler.process(&LogMessage::new(Severity::Error, "again")).unwrap());

        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nError message\nagain\n");
    }

    #[test]
    fn test_unopenable_file_still_consumes() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let mut handler = ErrorHandler::new(dir.path());

        assert!(handler.process(&LogMessage::new(Severity::Error, "lost")).unwrap());
    }

    #[test]
    fn test_unopenable_file_logs_below_warn() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{:?}", dir.path());
        let mut handler = ErrorHandler::new(dir.path());

        assert!(handler.process(&LogMessage::new(Severity::Error, "lost")).unwrap());

        let records = RECORDS.lock().unwrap();
        let about_target: Vec<&(Level, String)> = records.iter().filter(|(_, text)| text.contains(&target)).collect();
        assert!(!about_target.is_empty());
        assert!(about_target.iter().all(|(level, _)| *level > Level::Warn));
    }

    #[test]
    fn test_ignores_other_severities() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.txt");
        let mut handler = ErrorHandler::new(&path);

        assert!(!handler.process(&LogMessage::new(Severity::Warning, "nope")).unwrap());
        assert!(!path.exists());
    }
}
