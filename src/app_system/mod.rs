//! System configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod inventory_system;
pub mod seed;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use inventory_system::*;
pub use telemetry::*;
