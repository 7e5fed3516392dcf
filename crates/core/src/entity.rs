//! Entity trait: identity + continuity across state changes.

use crate::error::DomainResult;

/// Entity marker + minimal interface.
///
/// Every constructor and every mutating method of an entity finishes with
/// [`Entity::validate`]; an entity that fails validation is never handed back to
/// the caller, and a mutation that would break an invariant leaves the entity
/// untouched.
///
/// Entities derive `PartialEq` over all observable fields so that a rehydrated
/// instance compares equal to the one that was persisted.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Human-readable entity name (used in not-found errors, logs, notifications).
    const NAME: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Evaluate every declared invariant for this entity.
    fn validate(&self) -> DomainResult<()>;
}

/// Apply `mutate` to a copy of `entity`, validate the copy, and only then commit it.
///
/// This is how entities guarantee that a rejected mutation is never partially
/// applied.
pub fn mutate_validated<E, F>(entity: &mut E, mutate: F) -> DomainResult<()>
where
    E: Entity + Clone,
    F: FnOnce(&mut E),
{
    let mut candidate = entity.clone();
    mutate(&mut candidate);
    candidate.validate()?;
    *entity = candidate;
    Ok(())
}
