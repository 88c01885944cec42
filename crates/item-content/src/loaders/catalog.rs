//! Item catalog loader.

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};
use crate::validate::validate_catalog;

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate an item catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or has any
    /// validation issue.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog = Self::parse_unchecked(content)?;

        let issues = validate_catalog(&catalog);
        if !issues.is_empty() {
            let listing: Vec<String> = issues.iter().map(|issue| format!("  - {issue}")).collect();
            anyhow::bail!(
                "Catalog has {} validation issue(s):\n{}",
                issues.len(),
                listing.join("\n")
            );
        }

        debug!(
            target: "item_content::catalog",
            items = catalog.len(),
            effects = catalog.items.iter().map(|entry| entry.effects.len()).sum::<usize>(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load without validation. Used by tooling that reports issues itself.
    pub fn load_unchecked(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse_unchecked(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))
    }

    /// Parse without validation.
    pub fn parse_unchecked(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}
