use chrono::{DateTime, Utc};
use serde::Serialize;

/// Discriminator of an event family (e.g. "customer created" vs "customer address changed").
///
/// Kinds are the dispatcher's registry key. They are plain enums rather than
/// strings so that a typo cannot silently route an event nowhere.
pub trait EventKind: Copy + Eq + core::hash::Hash + core::fmt::Debug + Send + Sync + 'static {
    /// Stable name for diagnostics (e.g. "customers.customer.created").
    fn name(&self) -> &'static str;
}

/// A domain event family.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **self-describing**: each value carries its own [`EventKind`]
/// - **timestamped** at construction
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    type Kind: EventKind;

    /// The discriminator handlers are registered against.
    fn kind(&self) -> Self::Kind;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Immutable "something happened" record: a payload snapshot plus the instant it
/// was recorded.
///
/// The timestamp is taken at construction and cannot be supplied by the caller,
/// so two events with identical payloads built at different instants remain
/// distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEvent<T> {
    occurred_at: DateTime<Utc>,
    event_data: T,
}

impl<T> DomainEvent<T> {
    pub fn new(event_data: T) -> Self {
        Self {
            occurred_at: Utc::now(),
            event_data,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn event_data(&self) -> &T {
        &self.event_data
    }

    pub fn into_event_data(self) -> T {
        self.event_data
    }
}
