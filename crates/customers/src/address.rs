use serde::Serialize;

use shop_core::{DomainError, DomainResult, ValueObject};

/// Postal address of a customer.
///
/// Value object: validated on construction, immutable, compared by value.
/// Validation is fail-fast in field order (street, number, zipcode, city).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: String,
    number: u32,
    zipcode: String,
    city: String,
}

impl ValueObject for Address {}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zipcode: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number,
            zipcode: zipcode.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    fn validate(&self) -> DomainResult<()> {
        if self.street.is_empty() {
            return Err(DomainError::validation("Street is required."));
        }
        if self.number == 0 {
            return Err(DomainError::validation("Number is required."));
        }
        if self.zipcode.is_empty() {
            return Err(DomainError::validation("Zipcode is required."));
        }
        if self.city.is_empty() {
            return Err(DomainError::validation("City is required."));
        }
        Ok(())
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {}, {} - {}",
            self.street, self.number, self.zipcode, self.city
        )
    }
}
