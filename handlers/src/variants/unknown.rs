use crate::handler::{DispatchError, DispatchResult, LogHandler};
use common::types::{LogMessage, Severity};

pub struct UnknownHandler;

impl LogHandler for UnknownHandler {
    fn name(&self) -> &'static str {
        "UnknownHandler"
    }

    fn process(&mut self, message: &LogMessage) -> DispatchResult<bool> {
        if message.severity() == Severity::Unknown {
            return Err(DispatchError::Unhandled(format!("Unhandled message ({})", message.text())));
        }
        Ok(false)
    }
}
