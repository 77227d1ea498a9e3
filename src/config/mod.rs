//! Configuration: TOML file with defaults matching the built-in constants.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, DashboardConfig, TransactionsConfig, UiConfig};
