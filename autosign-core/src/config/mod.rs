//! Configuration loading and management

pub mod loader;
pub mod schema;

pub use schema::{LoggingConfig, NotifyConfig, WinmoesConfig, Y3ltConfig};
