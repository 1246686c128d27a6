//! Configuration: file format, defaults, loading and CLI overrides.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{Config, ServiceConfig, UiConfig, DEFAULT_ENDPOINT};
