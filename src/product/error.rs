use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the product service.
///
/// Commit failures never appear here; the service logs and absorbs them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),
    #[error("Product not found: ID {0} does not exist")]
    NotFound(i32),
    #[error("Product store error: {0}")]
    Store(#[from] StoreError),
}
