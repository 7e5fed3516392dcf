//! Customers domain module.
//!
//! Customer entity, its address value object, the events a customer emits and
//! the handlers that react to them. Pure domain logic; storage is reached only
//! through [`CustomerRepository`].

pub mod address;
pub mod customer;
pub mod events;
pub mod factory;
pub mod handlers;
pub mod repository;
pub mod service;

pub use address::Address;
pub use customer::{Customer, CustomerId};
pub use events::{CustomerAddressChanged, CustomerEvent, CustomerEventKind};
pub use factory::CustomerFactory;
pub use handlers::{
    LogWhenCustomerAddressIsChanged, LogWhenCustomerIsCreated1, LogWhenCustomerIsCreated2,
};
pub use repository::CustomerRepository;
pub use service::CustomerService;
