//! Runtime helpers for the binary.
//!
//! Centralizes catalog source selection and log setup so the CLI and tests
//! agree on precedence: an explicit path, then `MARKETPLACE_CATALOG`, then
//! the catalog compiled into the crate.

use crate::catalog::ProductCatalog;
use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable naming a catalog file to load instead of the bundled one.
pub const CATALOG_ENV: &str = "MARKETPLACE_CATALOG";
/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "MARKETPLACE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Bundled,
}

impl CatalogSource {
    /// Pick the source from an explicit path or the environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, env::var_os(CATALOG_ENV))
    }

    /// Same as [`CatalogSource::resolve`] with the environment value passed in.
    pub fn resolve_with(explicit: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        if let Some(path) = explicit {
            return CatalogSource::File(path);
        }
        match env_value {
            Some(value) if !value.is_empty() => CatalogSource::File(PathBuf::from(value)),
            _ => CatalogSource::Bundled,
        }
    }

    /// Load the catalog. Failure is fatal to startup.
    pub fn load(&self) -> Result<ProductCatalog> {
        let catalog = match self {
            CatalogSource::File(path) => ProductCatalog::load(path)
                .with_context(|| format!("unable to start with catalog {}", path.display()))?,
            CatalogSource::Bundled => ProductCatalog::bundled()?,
        };
        info!(source = %self, products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Bundled => f.write_str("bundled"),
        }
    }
}

/// Install the stderr log subscriber, filtered by `MARKETPLACE_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed (e.g. by an embedding test).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn explicit_path_wins_over_environment() {
        let source = CatalogSource::resolve_with(
            Some(PathBuf::from("/tmp/flag.json")),
            Some(OsString::from("/tmp/env.json")),
        );
        assert_eq!(source, CatalogSource::File(PathBuf::from("/tmp/flag.json")));
    }

    #[test]
    fn environment_used_when_no_flag() {
        let source = CatalogSource::resolve_with(None, Some(OsString::from("/tmp/env.json")));
        assert_eq!(source, CatalogSource::File(PathBuf::from("/tmp/env.json")));
    }

    #[test]
    fn bundled_is_the_fallback() {
        assert_eq!(CatalogSource::resolve_with(None, None), CatalogSource::Bundled);
        assert_eq!(
            CatalogSource::resolve_with(None, Some(OsString::new())),
            CatalogSource::Bundled
        );
        assert!(CatalogSource::Bundled.load().is_ok());
    }

    #[test]
    fn missing_file_is_fatal() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/marketplace.json"));
        let err = source.load().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/marketplace.json"));
    }

    #[test]
    fn file_source_loads_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"recommended": [], "popular": [{{"id": "x", "title": "X", "description": "", "price": "$0"}}], "marketing": []}}"#
        )
        .unwrap();
        let catalog = CatalogSource::File(file.path().to_path_buf()).load().unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
