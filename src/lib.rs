//! odoodev - Bootstrap Odoo development environments
//!
//! This is the library interface for odoodev: config loading, path
//! aggregation, editor settings generation and the `uv` bootstrap steps.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod project;
pub mod settings;

pub use config::Config;
pub use error::Error;
pub use project::Project;
