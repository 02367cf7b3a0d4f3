pub mod config;
pub mod message;
pub mod severity;

pub use message::LogMessage;
pub use severity::Severity;
