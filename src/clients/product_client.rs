use thiserror::Error;
use tracing::{debug, instrument};

use crate::product::{
    validate_request, FieldViolation, ProductAddRequest, ProductError, ProductResponse,
    ProductService, ProductUpdateRequest,
};
use crate::domain::Product;
use crate::store::{PersistenceContext, ProductStore};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Request failed validation ({} violation(s))", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Client for product operations.
///
/// Request shape is checked before anything reaches the service, and every
/// call runs in its own unit of work against the store.
#[derive(Clone, Debug)]
pub struct ProductClient {
    store: ProductStore,
}

impl ProductClient {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    fn service(&self) -> ProductService<Box<dyn PersistenceContext<Product>>> {
        ProductService::new(self.store.open())
    }

    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        request: ProductAddRequest,
    ) -> Result<ProductResponse, ClientError> {
        debug!("Sending request");
        validate_request(&request).map_err(ClientError::Validation)?;
        Ok(self.service().add_product(Some(request)).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, ClientError> {
        debug!("Sending request");
        Ok(self.service().get_all_products().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(
        &self,
        id: Option<i32>,
    ) -> Result<Option<ProductResponse>, ClientError> {
        debug!("Sending request");
        Ok(self.service().get_product(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        request: ProductUpdateRequest,
    ) -> Result<ProductResponse, ClientError> {
        debug!("Sending request");
        validate_request(&request).map_err(ClientError::Validation)?;
        Ok(self.service().update_product(Some(request)).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Option<i32>) -> Result<bool, ClientError> {
        debug!("Sending request");
        Ok(self.service().delete_product(id).await?)
    }
}
