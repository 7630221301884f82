mod app_system;
mod clients;
mod domain;
mod product;
mod store;

#[cfg(test)]
mod fixtures;

use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, AppConfig, InventorySystem, SystemError};
use crate::product::{ProductAddRequest, ProductUpdateRequest};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = AppConfig::load()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.logging);

    info!("Starting product inventory");

    let system = InventorySystem::start(&config).await?;
    let client = &system.product_client;

    let span = tracing::info_span!("product_creation");
    let created = async {
        info!("Creating demo product");
        client
            .create_product(ProductAddRequest {
                product_name: Some("Ergonomic Office Chair".into()),
                sku: Some("OFFC-0099".into()),
                category: Some("Office".into()),
                price: Some(Decimal::new(14_999, 2)),
                quantity: Some(8),
                date_added: Some(chrono::Local::now().naive_local()),
                location: Some("K-99".into()),
                is_active: true,
            })
            .await
    }
    .instrument(span)
    .await;

    match created {
        Ok(product) => {
            info!(product_id = product.id, status = %product.status(), "Product created");

            let span = tracing::info_span!("product_restock", product_id = product.id);
            let restocked = async {
                client
                    .update_product(ProductUpdateRequest {
                        id: product.id,
                        product_name: product.product_name.clone(),
                        sku: product.sku.clone(),
                        category: product.category.clone(),
                        price: product.price,
                        quantity: Some(40),
                        date_added: product.date_added,
                        location: product.location.clone(),
                        is_active: product.is_active,
                    })
                    .await
            }
            .instrument(span)
            .await;

            match restocked {
                Ok(updated) => {
                    info!(product_id = updated.id, status = %updated.status(), "Product restocked")
                }
                Err(e) => error!(error = %e, "Restock failed"),
            }

            match client.delete_product(Some(product.id)).await {
                Ok(removed) => info!(product_id = product.id, removed, "Demo product cleaned up"),
                Err(e) => error!(error = %e, "Cleanup failed"),
            }
        }
        Err(e) => error!(error = %e, "Product creation failed"),
    }

    match client.list_products().await {
        Ok(products) => info!(count = products.len(), "Catalogue loaded"),
        Err(e) => error!(error = %e, "Listing products failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
