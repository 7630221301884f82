//! Unit of work over the `products` table in PostgreSQL.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use tracing::{debug, info};

use super::messages::Change;
use super::{Entity, PersistenceContext, StoreError};
use crate::domain::Product;

const SELECT_ALL: &str = "SELECT id, product_name, sku, category, price, quantity, \
     date_added, location, is_active \
     FROM products ORDER BY id";

const SELECT_ONE: &str = "SELECT id, product_name, sku, category, price, quantity, \
     date_added, location, is_active \
     FROM products WHERE id = $1";

const INSERT: &str = "INSERT INTO products \
     (product_name, sku, category, price, quantity, date_added, location, is_active) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
     RETURNING id, product_name, sku, category, price, quantity, date_added, location, is_active";

const INSERT_WITH_ID: &str = "INSERT INTO products \
     (product_name, sku, category, price, quantity, date_added, location, is_active, id) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
     RETURNING id, product_name, sku, category, price, quantity, date_added, location, is_active";

const UPDATE: &str = "UPDATE products SET \
     product_name = $1, sku = $2, category = $3, price = $4, quantity = $5, \
     date_added = $6, location = $7, is_active = $8 \
     WHERE id = $9 \
     RETURNING id, product_name, sku, category, price, quantity, date_added, location, is_active";

const DELETE: &str = "DELETE FROM products WHERE id = $1";

const RESYNC_IDENTITY: &str = "SELECT setval(pg_get_serial_sequence('products', 'id'), \
     GREATEST((SELECT MAX(id) FROM products), 1))";

/// Connect a pool and bring the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(read_error)?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("Migration failed: {}", e)))?;

    info!(max_connections, "Connected to PostgreSQL");
    Ok(pool)
}

pub struct PgProductContext {
    pool: PgPool,
    pending: Vec<Change<Product>>,
}

impl PgProductContext {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pending: Vec::new(),
        }
    }
}

#[async_trait]
impl PersistenceContext<Product> for PgProductContext {
    async fn find(&mut self, id: i32) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)
    }

    async fn list(&mut self) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(read_error)
    }

    async fn count(&mut self) -> Result<usize, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(read_error)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn add(&mut self, entity: Product) {
        self.pending.push(Change::Insert(entity));
    }

    fn update(&mut self, entity: Product) {
        // Conflicts are detected by row count, not by comparing originals.
        self.pending.push(Change::Update { entity, original: None });
    }

    fn remove(&mut self, entity: Product) {
        self.pending.push(Change::Delete { id: entity.id() });
    }

    async fn save_changes(&mut self) -> Result<Vec<Product>, StoreError> {
        let changes = std::mem::take(&mut self.pending);
        debug!(changes = changes.len(), "Saving changes");

        let mut tx = self.pool.begin().await.map_err(commit_error)?;
        let mut written = Vec::new();

        for change in changes {
            match change {
                Change::Insert(entity) if entity.is_transient() => {
                    let row = bind_columns(sqlx::query_as(INSERT), entity)
                        .fetch_one(&mut *tx)
                        .await
                        .map_err(commit_error)?;
                    written.push(row);
                }
                Change::Insert(entity) => {
                    let id = entity.id();
                    let row = bind_columns(sqlx::query_as(INSERT_WITH_ID), entity)
                        .bind(id)
                        .fetch_one(&mut *tx)
                        .await
                        .map_err(commit_error)?;
                    sqlx::query(RESYNC_IDENTITY)
                        .execute(&mut *tx)
                        .await
                        .map_err(commit_error)?;
                    written.push(row);
                }
                Change::Update { entity, .. } => {
                    let id = entity.id();
                    let row = bind_columns(sqlx::query_as(UPDATE), entity)
                        .bind(id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(commit_error)?
                        .ok_or_else(|| {
                            StoreError::ConcurrencyConflict(format!(
                                "Row {} was deleted since it was read",
                                id
                            ))
                        })?;
                    written.push(row);
                }
                Change::Delete { id } => {
                    let result = sqlx::query(DELETE)
                        .bind(id)
                        .execute(&mut *tx)
                        .await
                        .map_err(commit_error)?;
                    if result.rows_affected() == 0 {
                        return Err(StoreError::ConcurrencyConflict(format!(
                            "Row {} was deleted since it was read",
                            id
                        )));
                    }
                }
            }
        }

        tx.commit().await.map_err(commit_error)?;
        Ok(written)
    }
}

fn bind_columns(
    query: QueryAs<'_, Postgres, Product, PgArguments>,
    product: Product,
) -> QueryAs<'_, Postgres, Product, PgArguments> {
    query
        .bind(product.product_name)
        .bind(product.sku)
        .bind(product.category)
        .bind(product.price)
        .bind(product.quantity)
        .bind(product.date_added)
        .bind(product.location)
        .bind(product.is_active)
}

fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
    )
}

fn read_error(e: sqlx::Error) -> StoreError {
    if is_connection_error(&e) {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::Query(e.to_string())
    }
}

fn commit_error(e: sqlx::Error) -> StoreError {
    if is_connection_error(&e) {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::UpdateFailure(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_error_classification() {
        assert!(matches!(read_error(sqlx::Error::PoolTimedOut), StoreError::Unavailable(_)));
        assert!(matches!(read_error(sqlx::Error::RowNotFound), StoreError::Query(_)));
        assert!(matches!(commit_error(sqlx::Error::PoolClosed), StoreError::Unavailable(_)));
        assert!(matches!(commit_error(sqlx::Error::RowNotFound), StoreError::UpdateFailure(_)));
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a disposable PostgreSQL database"]
    async fn test_round_trip_against_postgres() {
        let url = std::env::var("DATABASE_URL").unwrap();
        let pool = connect(&url, 2).await.unwrap();
        let mut ctx = PgProductContext::new(pool);

        ctx.add(Product {
            product_name: Some("Round Trip".into()),
            price: Some(Decimal::new(12345, 3)),
            quantity: Some(4),
            ..Product::default()
        });
        let written = ctx.save_changes().await.unwrap();
        let id = written[0].id;
        assert!(id > 0);
        assert_eq!(written[0].price, Some(Decimal::new(1235, 2)));

        let mut row = ctx.find(id).await.unwrap().unwrap();
        row.location = Some("TOO LONG".into());
        ctx.update(row.clone());
        assert!(matches!(ctx.save_changes().await, Err(StoreError::UpdateFailure(_))));

        ctx.remove(row.clone());
        ctx.save_changes().await.unwrap();
        assert!(ctx.find(id).await.unwrap().is_none());

        ctx.remove(row);
        assert!(matches!(ctx.save_changes().await, Err(StoreError::ConcurrencyConflict(_))));
    }
}
