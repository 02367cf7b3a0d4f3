use crate::handler::{DispatchResult, LogHandler};
use crate::variants::handler_for;
use common::types::config::HandlerKind;
use common::types::LogMessage;
use log::{debug, trace};
use std::path::Path;

/// Position of a handler inside a [`HandlerChain`]. Only valid for the chain that issued it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct HandlerId(usize);

struct Node {
    handler: Box<dyn LogHandler>,
    next: Option<HandlerId>,
}

/// Owns a set of handlers and the links between them.
///
/// Links are plain indices, so a handler never owns its successor. The links must not form a
/// cycle; this is not checked and a cyclic chain recurses until the stack overflows.
#[derive(Default)]
pub struct HandlerChain {
    nodes: Vec<Node>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chain with one handler per kind, linked in the given order.
    ///
    /// Returns the chain together with the id of every handler, in the same order as `kinds`.
    pub fn assemble(kinds: &[HandlerKind], error_log: &Path) -> (Self, Vec<(HandlerKind, HandlerId)>) {
        let mut chain = Self::new();
        let ids: Vec<(HandlerKind, HandlerId)> = kinds
            .iter()
            .map(|kind| (*kind, chain.add_boxed(handler_for(*kind, error_log))))
            .collect();

        for pair in ids.windows(2) {
            chain.set_next(pair[0].1, pair[1].1);
        }
        debug!(target: "chain", "Assembled chain {:?}", kinds);

        (chain, ids)
    }

    /// Takes ownership of the handler. It starts out without a successor.
    pub fn add(&mut self, handler: impl LogHandler + 'static) -> HandlerId {
        self.add_boxed(Box::new(handler))
    }

    pub fn add_boxed(&mut self, handler: Box<dyn LogHandler>) -> HandlerId {
        self.nodes.push(Node { handler, next: None });
        HandlerId(self.nodes.len() - 1)
    }

    /// Links `id` to `next`, replacing any previous link.
    ///
    /// # Panics
    /// If either id does not belong to this chain.
    pub fn set_next(&mut self, id: HandlerId, next: HandlerId) {
        assert!(next.0 < self.nodes.len(), "handler {:?} is not part of this chain", next);
        self.nodes[id.0].next = Some(next);
    }

    pub fn next_of(&self, id: HandlerId) -> Option<HandlerId> {
        self.nodes[id.0].next
    }

    pub fn name_of(&self, id: HandlerId) -> &'static str {
        self.nodes[id.0].handler.name()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dispatches `message` starting at `id`.
    ///
    /// Each handler either consumes the message or passes it on to its successor. A message that
    /// reaches the end of the chain unconsumed is dropped silently. An unrecoverable condition
    /// raised by any handler stops the dispatch and is returned to the caller.
    pub fn handle(&mut self, id: HandlerId, message: &LogMessage) -> DispatchResult<()> {
        let node = &mut self.nodes[id.0];
        let name = node.handler.name();

        if node.handler.process(message)? {
            trace!(target: "chain", "{} message consumed by {}", message.severity(), name);
            return Ok(());
        }

        let next = node.next;
        match next {
            Some(next) => {
                trace!(target: "chain", "{} passes {} message on", name, message.severity());
                self.handle(next, message)
            }
            None => {
                debug!(target: "chain", "Dropping unhandled {} message at {}", message.severity(), name);
                Ok(())
            }
        }
    }
}
