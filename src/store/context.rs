use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::messages::Change;
use super::table::TableClient;
use super::{Entity, PersistenceContext, StoreError};

/// Unit of work over an in-memory [`TableActor`](super::TableActor).
///
/// Rows read through the context are tracked with their original values so
/// that a later update can be checked against concurrent writers. Staged
/// changes are only sent to the table by `save_changes`.
pub struct DbContext<T: Entity> {
    table: TableClient<T>,
    pending: Vec<Change<T>>,
    tracked: HashMap<T::Id, T>,
}

impl<T: Entity> DbContext<T> {
    pub fn new(table: TableClient<T>) -> Self {
        Self {
            table,
            pending: Vec::new(),
            tracked: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }

    fn track(&mut self, entity: &T) {
        self.tracked.insert(entity.id(), entity.clone());
    }
}

#[async_trait]
impl<T: Entity> PersistenceContext<T> for DbContext<T> {
    async fn find(&mut self, id: T::Id) -> Result<Option<T>, StoreError> {
        let row = self.table.find(id).await?;
        if let Some(row) = &row {
            self.track(row);
        }
        Ok(row)
    }

    async fn list(&mut self) -> Result<Vec<T>, StoreError> {
        let rows = self.table.list().await?;
        for row in &rows {
            self.track(row);
        }
        Ok(rows)
    }

    async fn count(&mut self) -> Result<usize, StoreError> {
        self.table.count().await
    }

    fn add(&mut self, entity: T) {
        self.pending.push(Change::Insert(entity));
    }

    fn update(&mut self, entity: T) {
        let original = self.tracked.get(&entity.id()).cloned();
        self.pending.push(Change::Update { entity, original });
    }

    fn remove(&mut self, entity: T) {
        self.pending.push(Change::Delete { id: entity.id() });
    }

    async fn save_changes(&mut self) -> Result<Vec<T>, StoreError> {
        let changes = std::mem::take(&mut self.pending);
        let deleted: Vec<T::Id> = changes
            .iter()
            .filter_map(|change| match change {
                Change::Delete { id } => Some(*id),
                _ => None,
            })
            .collect();
        debug!(changes = changes.len(), "Saving changes");

        let written = self.table.commit(changes).await?;

        for id in deleted {
            self.tracked.remove(&id);
        }
        for entity in &written {
            self.track(entity);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::store::TableActor;
    use rust_decimal::Decimal;

    fn named(name: &str) -> Product {
        Product {
            product_name: Some(name.to_string()),
            ..Product::default()
        }
    }

    fn start() -> TableClient<Product> {
        let (actor, client) = TableActor::new(8);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_nothing_reaches_the_table_before_save() {
        let table = start();
        let mut ctx = DbContext::new(table.clone());

        ctx.add(named("Keyboard"));

        assert_eq!(ctx.pending_changes(), 1);
        assert_eq!(table.count().await.unwrap(), 0);

        let written = ctx.save_changes().await.unwrap();
        assert_eq!(written[0].id, 1);
        assert_eq!(ctx.pending_changes(), 0);
        assert_eq!(table.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_discards_staged_changes() {
        let table = start();
        let mut ctx = DbContext::new(table.clone());

        ctx.add(Product {
            price: Some(Decimal::from(10_i64.pow(16))),
            ..named("Overpriced")
        });
        assert!(ctx.save_changes().await.is_err());

        // The next unit of work must not replay the rejected insert.
        ctx.add(named("Mouse"));
        let written = ctx.save_changes().await.unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(table.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_writer_causes_conflict() {
        let table = start();
        let mut seed = DbContext::new(table.clone());
        seed.add(named("Keyboard"));
        seed.save_changes().await.unwrap();

        let mut first = DbContext::new(table.clone());
        let mut second = DbContext::new(table.clone());
        let mut mine = first.find(1).await.unwrap().unwrap();
        let mut theirs = second.find(1).await.unwrap().unwrap();

        theirs.quantity = Some(3);
        second.update(theirs);
        second.save_changes().await.unwrap();

        mine.quantity = Some(99);
        first.update(mine);
        let result = first.save_changes().await;

        assert!(matches!(result, Err(StoreError::ConcurrencyConflict(_))));
        assert_eq!(table.find(1).await.unwrap().unwrap().quantity, Some(3));
    }

    #[tokio::test]
    async fn test_own_commits_refresh_tracking() {
        let table = start();
        let mut ctx = DbContext::new(table.clone());
        ctx.add(named("Keyboard"));
        ctx.save_changes().await.unwrap();

        let mut row = ctx.find(1).await.unwrap().unwrap();
        row.quantity = Some(1);
        ctx.update(row.clone());
        ctx.save_changes().await.unwrap();

        row.quantity = Some(2);
        ctx.update(row);
        assert!(ctx.save_changes().await.is_ok());
    }

    #[tokio::test]
    async fn test_removing_a_vanished_row_is_a_conflict() {
        let table = start();
        let mut ctx = DbContext::new(table.clone());
        ctx.add(named("Keyboard"));
        ctx.save_changes().await.unwrap();
        let row = ctx.find(1).await.unwrap().unwrap();

        let mut other = DbContext::new(table.clone());
        other.remove(row.clone());
        other.save_changes().await.unwrap();

        ctx.remove(row);
        let result = ctx.save_changes().await;
        assert!(matches!(result, Err(StoreError::ConcurrencyConflict(_))));
    }
}
