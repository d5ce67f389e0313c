//! Configuration module for vidfetch.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration and request validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OptionsConfig, ServerConfig};
pub use modes::TransferMode;
pub use validation::{validate_base_url, validate_config, validate_identifier};
