use thiserror::Error;

use crate::Event;

/// Reacts to events of one kind (side effects only).
///
/// Errors are returned as-is to whoever called
/// [`EventDispatcher::notify`](crate::EventDispatcher::notify); the dispatcher
/// does not catch, log or wrap them. Handlers are trusted collaborators of the
/// producing use case, not isolated plugins.
pub trait EventHandler<E: Event>: Send + Sync {
    fn handle(&self, event: &E) -> anyhow::Result<()>;
}

/// Borrow a narrower event family out of a wider one.
///
/// Lets a handler written against one module's events (e.g. customer events) be
/// registered on a dispatcher for an application-wide event family that wraps
/// them. Every family trivially narrows to itself.
pub trait Narrow<T> {
    fn narrow(&self) -> Option<&T>;
}

impl<T> Narrow<T> for T {
    fn narrow(&self) -> Option<&T> {
        Some(self)
    }
}

/// Failures raised by the handlers shipped with the domain modules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// A handler received an event of a kind it does not react to.
    #[error("{handler} cannot handle event {kind}")]
    UnexpectedEvent {
        handler: &'static str,
        kind: &'static str,
    },
}

impl HandlerError {
    pub fn unexpected<E: Event>(handler: &'static str, event: &E) -> Self {
        use crate::EventKind;

        Self::UnexpectedEvent {
            handler,
            kind: event.kind().name(),
        }
    }
}
