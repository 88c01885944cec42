//! Content loaders for reading item data from files.
//!
//! This module provides loaders that convert RON/TOML files into item-effects
//! types: catalogs (RON), engine configuration (TOML) and context fixtures
//! (RON).

pub mod catalog;
pub mod config;
pub mod context;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use context::ContextLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
