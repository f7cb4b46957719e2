//! Scoped access to the shared catalog.
//!
//! A `CatalogProvider` owns the catalog for the life of the application and
//! hands out cheap `CatalogScope` handles. Components read the catalog only
//! through a scope; a scope that was never attached to a provider reports
//! `CatalogAccessError::OutsideProvider` instead of pretending the catalog is
//! empty.

use crate::catalog::store::ProductCatalog;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
/// Owner of the process-wide catalog.
pub struct CatalogProvider {
    catalog: Arc<ProductCatalog>,
}

impl CatalogProvider {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// A handle for one consumer.
    pub fn scope(&self) -> CatalogScope {
        CatalogScope {
            catalog: Some(Arc::clone(&self.catalog)),
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }
}

#[derive(Debug, Clone, Default)]
/// Read handle passed to components that need catalog data.
pub struct CatalogScope {
    catalog: Option<Arc<ProductCatalog>>,
}

impl CatalogScope {
    /// A scope with no provider behind it.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn products(&self) -> Result<&ProductCatalog, CatalogAccessError> {
        self.catalog
            .as_deref()
            .ok_or(CatalogAccessError::OutsideProvider)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Misuse of catalog access. Always a programming error.
pub enum CatalogAccessError {
    OutsideProvider,
}

impl fmt::Display for CatalogAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogAccessError::OutsideProvider => {
                write!(f, "catalog accessed outside of a CatalogProvider scope")
            }
        }
    }
}

impl std::error::Error for CatalogAccessError {}
