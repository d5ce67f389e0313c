//! Filesystem module.
//!
//! Provides:
//! - Filename resolution from response metadata
//! - The persistence sink that writes transfer bodies to disk

pub mod naming;
pub mod sink;

pub use naming::resolve_filename;
pub use sink::{DirectorySink, PersistenceSink};
