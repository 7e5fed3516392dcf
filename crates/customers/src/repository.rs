use shop_core::Repository;

use crate::customer::Customer;

/// Persistence contract for customers.
///
/// `find` must report a missing customer as `"Customer not found."`.
pub trait CustomerRepository: Repository<Customer> {}

impl<R> CustomerRepository for R where R: Repository<Customer> {}
