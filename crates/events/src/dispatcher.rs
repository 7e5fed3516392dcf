//! In-process, synchronous event dispatcher.
//!
//! The dispatcher is a registry from [`EventKind`] to an ordered list of
//! handlers. It is an explicit object: construct it, inject it where events are
//! published or subscribed, and tear it down with [`EventDispatcher::unregister_all`].
//!
//! ## Semantics
//!
//! - **Ordered fan-out**: handlers for a kind run in registration order.
//! - **No de-duplication**: registering the same handler twice runs it twice.
//! - **Identity removal**: `unregister` removes by pointer identity, never by
//!   structural equality.
//! - **No isolation**: the first failing handler aborts the rest of that
//!   `notify` call and its error reaches the caller unchanged.
//!
//! ## Thread Safety
//!
//! There is no internal synchronization. Mutation takes `&mut self`, so sharing a
//! dispatcher across threads requires an external lock (e.g. `Mutex<EventDispatcher<_>>`).

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Event, EventHandler, EventKind};

/// Shared reference to a registered handler.
pub type HandlerRef<E> = Arc<dyn EventHandler<E>>;

pub struct EventDispatcher<E: Event> {
    handlers: HashMap<E::Kind, Vec<HandlerRef<E>>>,
}

impl<E: Event> EventDispatcher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the sequence for `kind`, creating it if absent.
    pub fn register(&mut self, kind: E::Kind, handler: HandlerRef<E>) {
        let sequence = self.handlers.entry(kind).or_default();
        sequence.push(handler);

        tracing::debug!(
            event_kind = kind.name(),
            handlers = sequence.len(),
            "registered event handler"
        );
    }

    /// Remove the first occurrence of `handler` (by identity) from `kind`.
    ///
    /// Unknown kinds and absent handlers are a no-op. The sequence for `kind` is
    /// kept even if it becomes empty.
    pub fn unregister<H>(&mut self, kind: E::Kind, handler: &Arc<H>)
    where
        H: EventHandler<E> + ?Sized,
    {
        let Some(sequence) = self.handlers.get_mut(&kind) else {
            return;
        };

        let target = Arc::as_ptr(handler);
        if let Some(pos) = sequence
            .iter()
            .position(|registered| std::ptr::addr_eq(Arc::as_ptr(registered), target))
        {
            sequence.remove(pos);
            tracing::debug!(
                event_kind = kind.name(),
                handlers = sequence.len(),
                "unregistered event handler"
            );
        }
    }

    /// Drop every kind and every handler.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
        tracing::debug!("cleared event handler registry");
    }

    /// Invoke every handler registered for the event's kind, in order.
    ///
    /// Returns the first handler error unchanged; handlers after the failing
    /// one are not invoked.
    pub fn notify(&self, event: &E) -> anyhow::Result<()> {
        let kind = event.kind();
        let Some(sequence) = self.handlers.get(&kind) else {
            tracing::trace!(event_kind = kind.name(), "no handlers registered");
            return Ok(());
        };

        tracing::debug!(
            event_kind = kind.name(),
            handlers = sequence.len(),
            "dispatching event"
        );

        for handler in sequence {
            handler.handle(event)?;
        }
        Ok(())
    }

    /// Read-only view of the registry (diagnostics/tests).
    pub fn event_handlers(&self) -> &HashMap<E::Kind, Vec<HandlerRef<E>>> {
        &self.handlers
    }

    /// Handlers registered for `kind`, in invocation order.
    ///
    /// `None` if the kind was never registered (or the registry was cleared);
    /// `Some(&[])` if every handler was unregistered.
    pub fn handlers(&self, kind: E::Kind) -> Option<&[HandlerRef<E>]> {
        self.handlers.get(&kind).map(Vec::as_slice)
    }
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<E: Event> core::fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (kind, sequence) in &self.handlers {
            map.entry(&kind.name(), &sequence.len());
        }
        map.finish()
    }
}
