use crate::handler::{DispatchResult, LogHandler};
use common::types::{LogMessage, Severity};
use log::warn;
use std::io;
use std::io::{Stdout, Write};

/// Prints warnings, one per line. Writes to stdout unless another sink is given.
pub struct WarningHandler<W: Write = Stdout> {
    sink: W,
}

impl WarningHandler {
    pub fn new() -> Self {
        Self { sink: io::stdout() }
    }
}

impl Default for WarningHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> WarningHandler<W> {
    pub fn with_sink(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: Write> LogHandler for WarningHandler<W> {
    fn name(&self) -> &'static str {
        "WarningHandler"
    }

    fn process(&mut self, message: &LogMessage) -> DispatchResult<bool> {
        if message.severity() != Severity::Warning {
            return Ok(false);
        }

        let written = writeln!(self.sink, "{}", message.text()).and_then(|_| self.sink.flush());
        if let Err(err) = written {
            warn!(target: "handlers", "Could not print warning: {}", err);
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_text_and_newline() {
        let mut handler = WarningHandler::with_sink(Vec::new());

        let consumed = handler.process(&LogMessage::new(Severity::Warning, "Warning message")).unwrap();

        assert!(consumed);
        assert_eq!(handler.sink, b"Warning message\n");
    }

    #[test]
    fn test_ignores_other_severities() {
        let mut handler = WarningHandler::with_sink(Vec::new());

        for severity in [Severity::Error, Severity::FatalError, Severity::Unknown] {
            assert!(!handler.process(&LogMessage::new(severity, "nope")).unwrap());
        }
        assert!(handler.sink.is_empty());
    }
}
