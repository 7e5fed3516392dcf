//! Domain events and the in-process dispatcher that fans them out to handlers.
//!
//! This crate is domain-agnostic: it knows nothing about customers, products or
//! orders. Domain modules define their own event families (an enum implementing
//! [`Event`]) and handlers (implementing [`EventHandler`]).

mod dispatcher;
mod event;
mod handler;

pub use dispatcher::{EventDispatcher, HandlerRef};
pub use event::{DomainEvent, Event, EventKind};
pub use handler::{EventHandler, HandlerError, Narrow};
