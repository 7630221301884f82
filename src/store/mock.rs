//! # Mock Table
//!
//! Utilities for testing code that commits through a [`DbContext`] without a
//! running table actor.
//!
//! Use [`create_mock_context`] to get a context and the receiver its requests
//! arrive on. Then answer them with [`expect_find`] or [`expect_commit`], which
//! lets a test script failures the real table would only produce under a race.

use tokio::sync::mpsc;

use super::messages::{Change, Response, TableRequest};
use super::{DbContext, Entity, TableClient};

/// Creates a context whose table is the returned receiver.
pub fn create_mock_context<T: Entity>(
    buffer_size: usize,
) -> (DbContext<T>, mpsc::Receiver<TableRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DbContext::new(TableClient::new(sender)), receiver)
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: Entity>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(TableRequest::Find { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Commit request
pub async fn expect_commit<T: Entity>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(Vec<Change<T>>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(TableRequest::Commit { changes, respond_to }) => Some((changes, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::store::{PersistenceContext, StoreError};

    #[tokio::test]
    async fn test_mock_context() {
        let (mut ctx, mut receiver) = create_mock_context::<Product>(4);

        let save_task = tokio::spawn(async move {
            ctx.add(Product::default());
            ctx.save_changes().await
        });

        let (changes, responder) = expect_commit(&mut receiver)
            .await
            .expect("Expected Commit request");
        assert!(matches!(changes.as_slice(), [Change::Insert(_)]));
        responder
            .send(Err(StoreError::UpdateFailure("disk full".into())))
            .unwrap();

        let result = save_task.await.unwrap();
        assert_eq!(result, Err(StoreError::UpdateFailure("disk full".into())));
    }
}
