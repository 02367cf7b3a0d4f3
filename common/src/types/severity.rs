use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// Classification of a log message. Every message carries exactly one, and a handler is
/// responsible for exactly one of them.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Warning,
    Error,
    FatalError,
    Unknown,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::FatalError => "fatal-error",
            Severity::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
