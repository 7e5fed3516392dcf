//! Repository contract (persistence boundary).
//!
//! The domain only ever talks to storage through this trait; implementations
//! live outside the domain crates.

use crate::entity::Entity;

/// Persist and retrieve entities of type `T`.
///
/// Errors are implementation-specific; therefore the error type is associated.
/// `find` must surface a missing record as an error distinct from validation
/// failures (e.g. `"Customer not found."`).
pub trait Repository<T: Entity> {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn create(&self, entity: &T) -> Result<(), Self::Error>;

    fn update(&self, entity: &T) -> Result<(), Self::Error>;

    fn find(&self, id: &T::Id) -> Result<T, Self::Error>;

    fn find_all(&self) -> Result<Vec<T>, Self::Error>;
}

impl<T, R> Repository<T> for std::sync::Arc<R>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    type Error = R::Error;

    fn create(&self, entity: &T) -> Result<(), Self::Error> {
        (**self).create(entity)
    }

    fn update(&self, entity: &T) -> Result<(), Self::Error> {
        (**self).update(entity)
    }

    fn find(&self, id: &T::Id) -> Result<T, Self::Error> {
        (**self).find(id)
    }

    fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        (**self).find_all()
    }
}
