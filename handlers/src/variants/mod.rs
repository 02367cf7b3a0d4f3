pub mod error;
pub mod fatal;
pub mod unknown;
pub mod warning;

pub use error::ErrorHandler;
pub use fatal::FatalErrorHandler;
pub use unknown::UnknownHandler;
pub use warning::WarningHandler;

use crate::handler::LogHandler;
use common::types::config::HandlerKind;
use std::path::Path;

/// Creates the production handler of the given kind. Only the error handler uses `error_log`.
pub fn handler_for(kind: HandlerKind, error_log: &Path) -> Box<dyn LogHandler> {
    match kind {
        HandlerKind::Warning => Box::new(WarningHandler::new()),
        HandlerKind::Error => Box::new(ErrorHandler::new(error_log)),
        HandlerKind::FatalError => Box::new(FatalErrorHandler),
        HandlerKind::Unknown => Box::new(UnknownHandler),
    }
}
