//! Data-driven item catalogs and loaders.
//!
//! This crate houses the content side of the item effect engine:
//! - Item catalogs (effects per item, data-driven via RON)
//! - Catalog validation (shape checks the engine would otherwise fault on)
//! - Engine configuration (data-driven via TOML)
//! - Context fixtures for tooling and tests (RON)
//!
//! All loaders use item-effects types directly with serde for RON/TOML
//! deserialization.

pub mod catalog;
pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ItemCatalog, ItemEffects};
pub use validate::{ValidationIssue, validate_catalog};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContextLoader, LoadResult};
