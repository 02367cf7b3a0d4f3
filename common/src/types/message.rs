use crate::types::Severity;

/// An immutable log message. Once built, neither the classification nor the text can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    severity: Severity,
    text: String,
}

impl LogMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self { severity, text: text.into() }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
