//! Product catalog wiring.
//!
//! This module wraps the JSON catalog under `data/products.json` so the rest
//! of the crate reads a validated, immutable snapshot. Types here mirror the
//! schema fields; callers use `ProductCatalog` for lookups and reach it through
//! a `CatalogScope` handed out by `CatalogProvider`.

pub mod identity;
pub mod model;
pub mod provider;
pub mod store;

pub use identity::{IdQuery, PartitionKey, ProductId};
pub use model::{CatalogData, DEFAULT_CATEGORY, Feature, Product};
pub use provider::{CatalogAccessError, CatalogProvider, CatalogScope};
pub use store::ProductCatalog;
