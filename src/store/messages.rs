use tokio::sync::oneshot;

use super::{Entity, StoreError};

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A single staged mutation, as shipped to the table on commit.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T: Entity> {
    Insert(T),
    Update {
        entity: T,
        /// Values as they were read, when the row was tracked.
        original: Option<T>,
    },
    Delete {
        id: T::Id,
    },
}

/// Typed messages for the table actor. Each variant carries a oneshot
/// channel for the reply.
#[derive(Debug)]
pub enum TableRequest<T: Entity> {
    Find {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Commit {
        changes: Vec<Change<T>>,
        respond_to: Response<Vec<T>>,
    },
}
