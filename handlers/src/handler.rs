use common::types::LogMessage;
use std::fmt;
use std::fmt::Display;

pub type DispatchResult<O> = Result<O, DispatchError>;

/// A single link in a handler chain.
///
/// Implementors only decide whether a message is theirs. Forwarding to the next link is done by
/// [`HandlerChain::handle`](crate::HandlerChain::handle).
pub trait LogHandler {
    fn name(&self) -> &'static str;

    /// Consumes the message if its classification is this handler's responsibility.
    ///
    /// Returns `Ok(true)` if the message was consumed and `Ok(false)` if it should be passed on.
    /// A non-matching message must not cause any side effect.
    fn process(&mut self, message: &LogMessage) -> DispatchResult<bool>;
}

/// A message that could not be dispatched as ordinary control flow. It aborts the whole dispatch
/// and is handed back to whoever started it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    Fatal(String),
    Unhandled(String),
}

impl DispatchError {
    pub fn payload(&self) -> &str {
        match self {
            DispatchError::Fatal(payload) => payload,
            DispatchError::Unhandled(payload) => payload,
        }
    }
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.payload())
    }
}
