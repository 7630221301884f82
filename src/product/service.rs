use tracing::{debug, error, info, instrument, warn};

use super::dtos::{ProductAddRequest, ProductResponse, ProductUpdateRequest};
use super::error::ProductError;
use super::mapping::apply_update;
use crate::domain::Product;
use crate::store::{PersistenceContext, StoreError};

/// Validates presence, maps DTOs and commits product mutations through a
/// single persistence context.
///
/// Field shape is not re-validated here; that is the boundary's job. Commit
/// failures are logged and absorbed: add and update hand back the in-memory
/// state, delete reports `false`. A caller therefore cannot tell a committed
/// add/update from one whose commit failed without reading the row back.
pub struct ProductService<C> {
    context: C,
}

impl<C: PersistenceContext<Product>> ProductService<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    #[instrument(skip(self, request))]
    pub async fn add_product(
        &mut self,
        request: Option<ProductAddRequest>,
    ) -> Result<ProductResponse, ProductError> {
        let request = request.ok_or(ProductError::InvalidArgument("add request"))?;
        let product = Product::from(request);

        self.context.add(product.clone());

        match self.context.save_changes().await {
            Ok(written) => {
                let saved = written.into_iter().next().unwrap_or(product);
                info!(product_id = saved.id, "Product added");
                Ok(ProductResponse::from(saved))
            }
            Err(e) => {
                absorb_commit_failure(e, "adding")?;
                Ok(ProductResponse::from(product))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&mut self) -> Result<Vec<ProductResponse>, ProductError> {
        let products = self.context.list().await?;
        debug!(count = products.len(), "Products listed");
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_product(
        &mut self,
        id: Option<i32>,
    ) -> Result<Option<ProductResponse>, ProductError> {
        let Some(id) = id else {
            return Ok(None);
        };

        let product = self.context.find(id).await?;
        Ok(product.map(ProductResponse::from))
    }

    #[instrument(skip(self, request))]
    pub async fn update_product(
        &mut self,
        request: Option<ProductUpdateRequest>,
    ) -> Result<ProductResponse, ProductError> {
        let request = request.ok_or(ProductError::InvalidArgument("update request"))?;
        let id = request.id;

        let mut product = self
            .context
            .find(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        apply_update(&mut product, request);
        self.context.update(product.clone());

        match self.context.save_changes().await {
            Ok(written) => {
                let saved = written.into_iter().next().unwrap_or(product);
                info!(product_id = saved.id, "Product updated");
                Ok(ProductResponse::from(saved))
            }
            Err(e) => {
                absorb_commit_failure(e, "updating")?;
                Ok(ProductResponse::from(product))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&mut self, id: Option<i32>) -> Result<bool, ProductError> {
        let id = id.ok_or(ProductError::InvalidArgument("id"))?;

        let Some(product) = self.context.find(id).await? else {
            debug!(product_id = id, "Nothing to delete");
            return Ok(false);
        };

        self.context.remove(product);

        match self.context.save_changes().await {
            Ok(_) => {
                info!(product_id = id, "Product removed");
                Ok(true)
            }
            Err(e) => {
                absorb_commit_failure(e, "removing")?;
                Ok(false)
            }
        }
    }
}

/// Log a commit failure and swallow it. Errors that are not commit failures
/// are handed back for propagation.
fn absorb_commit_failure(e: StoreError, operation: &str) -> Result<(), ProductError> {
    if !e.is_commit_failure() {
        return Err(ProductError::Store(e));
    }
    if let StoreError::ConcurrencyConflict(_) = e {
        warn!(error = %e, "Concurrency conflict while {} product", operation);
    } else {
        error!(error = %e, "Database update failed while {} product", operation);
    }
    Ok(())
}
