use crate::handler::{DispatchError, DispatchResult, LogHandler};
use common::types::{LogMessage, Severity};

/// Aborts the dispatch of fatal errors, carrying the message text unchanged.
pub struct FatalErrorHandler;

impl LogHandler for FatalErrorHandler {
    fn name(&self) -> &'static str {
        "FatalErrorHandler"
    }

    fn process(&mut self, message: &LogMessage) -> DispatchResult<bool> {
        if message.severity() == Severity::FatalError {
            return Err(DispatchError::Fatal(message.text().to_string()));
        }
        Ok(false)
    }
}
