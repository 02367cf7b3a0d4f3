pub mod chain;
pub mod handler;
pub mod variants;

pub use chain::{HandlerChain, HandlerId};
pub use handler::{DispatchError, DispatchResult, LogHandler};
