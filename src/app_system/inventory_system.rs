use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::config::{AppConfig, ConfigError, StoreBackend};
use super::error::SystemError;
use super::seed::seed_if_empty;
use crate::clients::ProductClient;
use crate::domain::Product;
use crate::store::{postgres, ProductStore, TableActor};

/// The running application: the configured product store and the client
/// wired to it.
///
/// Responsible for opening the backend, seeding it, and shutting it down.
pub struct InventorySystem {
    pub product_client: ProductClient,
    store: ProductStore,
    handles: Vec<JoinHandle<()>>,
}

impl InventorySystem {
    #[instrument(skip(config), fields(backend = ?config.store.backend))]
    pub async fn start(config: &AppConfig) -> Result<Self, SystemError> {
        config.validate()?;

        let mut handles = Vec::new();
        let store = match config.store.backend {
            StoreBackend::Memory => {
                let (actor, table) = TableActor::<Product>::new(config.store.channel_buffer);
                handles.push(tokio::spawn(actor.run()));
                ProductStore::Memory(table)
            }
            StoreBackend::Postgres => {
                let url = config
                    .store
                    .database_url
                    .as_deref()
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                ProductStore::Postgres(postgres::connect(url, config.store.max_connections).await?)
            }
        };

        if config.seed.enabled {
            let mut context = store.open();
            seed_if_empty(context.as_mut()).await?;
        }

        info!(backend = store.backend(), "Inventory system started");
        Ok(Self {
            product_client: ProductClient::new(store.clone()),
            store,
            handles,
        })
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // The table actor stops once every client handle is gone.
        drop(self.product_client);
        if let ProductStore::Postgres(pool) = &self.store {
            pool.close().await;
        }
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Task(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::seed::seed_products;

    #[tokio::test]
    async fn test_memory_system_starts_seeded() {
        let system = InventorySystem::start(&AppConfig::default()).await.unwrap();

        let products = system.product_client.list_products().await.unwrap();

        assert_eq!(products.len(), seed_products().len());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_seeding_can_be_disabled() {
        let mut config = AppConfig::default();
        config.seed.enabled = false;

        let system = InventorySystem::start(&config).await.unwrap();

        assert!(system.product_client.list_products().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_postgres_without_url_fails_fast() {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Postgres;

        let result = InventorySystem::start(&config).await;

        assert!(matches!(
            result,
            Err(SystemError::Config(ConfigError::MissingDatabaseUrl))
        ));
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_outstanding_clients() {
        let mut config = AppConfig::default();
        config.seed.enabled = false;
        let system = InventorySystem::start(&config).await.unwrap();
        let client = system.product_client.clone();

        let pending = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            let count = client.list_products().await.map(|p| p.len());
            drop(client);
            count
        });

        system.shutdown().await.unwrap();
        assert_eq!(pending.await.unwrap(), Ok(0));
    }
}
