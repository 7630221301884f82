use sqlx::PgPool;

use super::{DbContext, PersistenceContext, PgProductContext, TableClient};
use crate::domain::Product;

/// Cloneable handle to the configured product store. Each call to
/// [`ProductStore::open`] starts an independent unit of work.
#[derive(Clone, Debug)]
pub enum ProductStore {
    Memory(TableClient<Product>),
    Postgres(PgPool),
}

impl ProductStore {
    pub fn open(&self) -> Box<dyn PersistenceContext<Product>> {
        match self {
            ProductStore::Memory(table) => Box::new(DbContext::new(table.clone())),
            ProductStore::Postgres(pool) => Box::new(PgProductContext::new(pool.clone())),
        }
    }

    pub fn backend(&self) -> &'static str {
        match self {
            ProductStore::Memory(_) => "memory",
            ProductStore::Postgres(_) => "postgres",
        }
    }
}
