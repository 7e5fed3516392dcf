//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one. Construction is where they validate themselves, so a live
/// value object is always valid.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Address { street: String, number: u32, zipcode: String, city: String }
///
/// impl ValueObject for Address {}
///
/// let a = Address::new("Street 1", 1, "Zipcode 1", "City 1")?;
/// assert_eq!(a, a.clone()); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
