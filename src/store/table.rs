//! An in-memory relational table served by a single actor task.
//!
//! The actor is the only owner of the rows; every read and every commit is a
//! message, so commits are serialised and atomic without any locking.

use std::collections::BTreeMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use super::messages::{Change, TableRequest};
use super::{Entity, StoreError};

// =============================================================================
// THE TABLE ACTOR
// =============================================================================

pub struct TableActor<T: Entity> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    rows: BTreeMap<T::Id, T>,
    /// Highest identity ever handed out; identities are never reused.
    last_id: Option<T::Id>,
}

impl<T: Entity> TableActor<T> {
    pub fn new(buffer_size: usize) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: BTreeMap::new(),
            last_id: None,
        };
        (actor, TableClient::new(sender))
    }

    #[instrument(name = "table_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Table actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableRequest::Find { id, respond_to } => {
                    debug!(id = %id, "Processing find request");
                    let row = self.rows.get(&id).cloned();
                    let _ = respond_to.send(Ok(row));
                }
                TableRequest::List { respond_to } => {
                    debug!(rows = self.rows.len(), "Processing list request");
                    let rows = self.rows.values().cloned().collect();
                    let _ = respond_to.send(Ok(rows));
                }
                TableRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.rows.len()));
                }
                TableRequest::Commit { changes, respond_to } => {
                    let result = self.commit(changes);
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(rows = self.rows.len(), "Table actor stopped");
    }

    fn commit(&mut self, changes: Vec<Change<T>>) -> Result<Vec<T>, StoreError> {
        debug!(changes = changes.len(), "Processing commit request");
        match self.apply(changes) {
            Ok((rows, last_id, written)) => {
                self.rows = rows;
                self.last_id = last_id;
                Ok(written)
            }
            Err(e) => {
                warn!(error = %e, "Commit rejected, table unchanged");
                Err(e)
            }
        }
    }

    /// Apply `changes` to a copy of the table. The copy only replaces the
    /// live rows if every change succeeds.
    #[allow(clippy::type_complexity)]
    fn apply(
        &self,
        changes: Vec<Change<T>>,
    ) -> Result<(BTreeMap<T::Id, T>, Option<T::Id>, Vec<T>), StoreError> {
        let mut rows = self.rows.clone();
        let mut last_id = self.last_id;
        let mut written = Vec::new();

        for change in changes {
            match change {
                Change::Insert(mut entity) => {
                    if entity.is_transient() {
                        let id = T::next_id(last_id).ok_or_else(|| {
                            StoreError::UpdateFailure("Identity space exhausted".to_string())
                        })?;
                        entity.assign_id(id);
                    } else if rows.contains_key(&entity.id()) {
                        return Err(StoreError::UpdateFailure(format!(
                            "Duplicate primary key {}",
                            entity.id()
                        )));
                    }
                    entity.enforce_columns().map_err(StoreError::UpdateFailure)?;

                    let id = entity.id();
                    last_id = Some(last_id.map_or(id, |last| last.max(id)));
                    rows.insert(id, entity.clone());
                    written.push(entity);
                }
                Change::Update { mut entity, original } => {
                    let id = entity.id();
                    let current = rows.get(&id).ok_or_else(|| {
                        StoreError::ConcurrencyConflict(format!(
                            "Row {} was deleted since it was read",
                            id
                        ))
                    })?;
                    if original.is_some_and(|original| *current != original) {
                        return Err(StoreError::ConcurrencyConflict(format!(
                            "Row {} was modified since it was read",
                            id
                        )));
                    }
                    entity.enforce_columns().map_err(StoreError::UpdateFailure)?;

                    rows.insert(id, entity.clone());
                    written.push(entity);
                }
                Change::Delete { id } => {
                    if rows.remove(&id).is_none() {
                        return Err(StoreError::ConcurrencyConflict(format!(
                            "Row {} was deleted since it was read",
                            id
                        )));
                    }
                }
            }
        }

        Ok((rows, last_id, written))
    }
}

// =============================================================================
// THE TABLE CLIENT
// =============================================================================

/// Cheap, cloneable handle to a running [`TableActor`].
#[derive(Clone, Debug)]
pub struct TableClient<T: Entity> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: Entity> TableClient<T> {
    pub fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn find(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TableRequest::Find { id, respond_to }).await?;
        response.await.map_err(|_| dropped())?
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TableRequest::List { respond_to }).await?;
        response.await.map_err(|_| dropped())?
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TableRequest::Count { respond_to }).await?;
        response.await.map_err(|_| dropped())?
    }

    pub async fn commit(&self, changes: Vec<Change<T>>) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TableRequest::Commit { changes, respond_to }).await?;
        response.await.map_err(|_| dropped())?
    }

    async fn send(&self, request: TableRequest<T>) -> Result<(), StoreError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| StoreError::Unavailable("Table actor closed".to_string()))
    }
}

fn dropped() -> StoreError {
    StoreError::Unavailable("Table actor dropped the request".to_string())
}
