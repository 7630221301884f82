//! Persistence plumbing: the entity abstraction, the unit-of-work trait the
//! product service commits through, and its two backends (an in-memory table
//! actor and PostgreSQL).

pub mod context;
pub mod handle;
pub mod messages;
pub mod postgres;
pub mod table;

#[cfg(test)]
pub mod mock;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use thiserror::Error;

pub use context::DbContext;
pub use handle::ProductStore;
pub use postgres::PgProductContext;
pub use table::{TableActor, TableClient};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any persisted record must implement to live in a table.
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + 'static {
    type Id: Copy + Ord + Hash + Display + Debug + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> Self::Id;

    /// True while the entity has no store-assigned identity.
    fn is_transient(&self) -> bool;

    fn assign_id(&mut self, id: Self::Id);

    /// Identity value following `last`, or the first one for an empty table.
    /// `None` once the identity space is exhausted.
    fn next_id(last: Option<Self::Id>) -> Option<Self::Id>;

    /// Normalise the row the way its columns store it and reject values the
    /// columns cannot hold.
    fn enforce_columns(&mut self) -> Result<(), String>;
}

/// Errors raised by a persistence context.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),
    #[error("Store update failed: {0}")]
    UpdateFailure(String),
    #[error("Store query failed: {0}")]
    Query(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether the error was raised while committing staged changes, as
    /// opposed to the store being unreachable or a read failing.
    pub fn is_commit_failure(&self) -> bool {
        matches!(
            self,
            StoreError::ConcurrencyConflict(_) | StoreError::UpdateFailure(_)
        )
    }
}

/// A unit of work over one table: reads go straight to the store, writes are
/// staged and only reach it on [`PersistenceContext::save_changes`].
#[async_trait]
pub trait PersistenceContext<T: Entity>: Send {
    async fn find(&mut self, id: T::Id) -> Result<Option<T>, StoreError>;

    async fn list(&mut self) -> Result<Vec<T>, StoreError>;

    async fn count(&mut self) -> Result<usize, StoreError>;

    fn add(&mut self, entity: T);

    fn update(&mut self, entity: T);

    fn remove(&mut self, entity: T);

    /// Commit every staged change as one atomic unit.
    ///
    /// Returns the post-commit state of each inserted or updated entity, in
    /// the order the changes were staged. The staged set is cleared whether
    /// or not the commit succeeds.
    async fn save_changes(&mut self) -> Result<Vec<T>, StoreError>;
}

#[async_trait]
impl<T, C> PersistenceContext<T> for Box<C>
where
    T: Entity,
    C: PersistenceContext<T> + ?Sized,
{
    async fn find(&mut self, id: T::Id) -> Result<Option<T>, StoreError> {
        (**self).find(id).await
    }

    async fn list(&mut self) -> Result<Vec<T>, StoreError> {
        (**self).list().await
    }

    async fn count(&mut self) -> Result<usize, StoreError> {
        (**self).count().await
    }

    fn add(&mut self, entity: T) {
        (**self).add(entity)
    }

    fn update(&mut self, entity: T) {
        (**self).update(entity)
    }

    fn remove(&mut self, entity: T) {
        (**self).remove(entity)
    }

    async fn save_changes(&mut self) -> Result<Vec<T>, StoreError> {
        (**self).save_changes().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_failure_classification() {
        assert!(StoreError::ConcurrencyConflict("row 1".into()).is_commit_failure());
        assert!(StoreError::UpdateFailure("too long".into()).is_commit_failure());
        assert!(!StoreError::Unavailable("closed".into()).is_commit_failure());
        assert!(!StoreError::Query("bad scan".into()).is_commit_failure());
    }
}
