//! Product catalogue logic: request/response shapes, validation, mapping
//! and the persistence service.

mod dtos;
pub mod entity;
pub mod error;
pub mod mapping;
pub mod service;
pub mod validation;

pub use dtos::*;
pub use error::*;
pub use service::*;
pub use validation::*;
