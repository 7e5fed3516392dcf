use serde::Serialize;

use shop_core::{DomainError, DomainResult, Entity, mutate_validated, string_id};

use crate::address::Address;

string_id!(
    /// Customer identifier.
    CustomerId
);

/// Entity: Customer.
///
/// Validation policy: fail-fast, first violated invariant wins, in the order
/// id, name, activation-requires-address.
///
/// Reward points are unsigned, so they can never go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Create a new, inactive customer without an address.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> DomainResult<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuild a customer from persisted state.
    ///
    /// Runs the same validation as a fresh construction, so corrupted rows
    /// (e.g. active without an address) are rejected.
    pub fn restore(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: u64,
    ) -> DomainResult<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        Ok(customer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        mutate_validated(self, |c| c.name = name)
    }

    /// Replace the address. The address validated itself on construction.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Transition inactive -> active. Requires an address; state is unchanged on failure.
    pub fn activate(&mut self) -> DomainResult<()> {
        mutate_validated(self, |c| c.active = true)
    }

    /// Transition to inactive. Always succeeds.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl Entity for Customer {
    type Id = CustomerId;
    const NAME: &'static str = "Customer";

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required."));
        }
        if self.name.is_empty() {
            return Err(DomainError::validation("Name is required."));
        }
        if self.active && self.address.is_none() {
            return Err(DomainError::validation(
                "Address is mandatory to activate a customer.",
            ));
        }
        Ok(())
    }
}
