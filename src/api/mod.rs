//! Extraction API module.
//!
//! This module provides:
//! - The HTTP executor for the extraction REST API
//! - Wire payload and response types

pub mod client;
pub mod types;

pub use client::HttpExecutor;
pub use types::*;
