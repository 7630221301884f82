//! Boundary clients: the layer a presentation tier calls into.

pub mod product_client;

pub use product_client::*;
