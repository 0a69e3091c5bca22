//! Configuration management for odoodev

mod aggregate;
pub mod loader;
mod schema;

pub use aggregate::aggregate_paths;
pub use loader::{default_config_content, load_config, parse_config, CONFIG_FILENAME};
pub use schema::*;
