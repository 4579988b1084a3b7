//! Client configuration: service endpoint and share origin.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServiceConfig, ShareConfig};
