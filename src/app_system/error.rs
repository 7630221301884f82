use thiserror::Error;

use super::config::ConfigError;
use crate::store::StoreError;

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Store initialisation failed: {0}")]
    Store(#[from] StoreError),
    #[error("Table actor task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
