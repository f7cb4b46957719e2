//! Validated, read-only view of a product catalog.
//!
//! The store checks the document against the bundled schema before typed
//! parsing, then applies semantic checks the schema cannot express. Once
//! built it never changes; every accessor is a pure read.

use crate::catalog::identity::{IdQuery, PartitionKey};
use crate::catalog::model::{CatalogData, Product};
use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, trace, warn};

const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

#[derive(Debug)]
/// Catalog partitions plus the flattened display order.
pub struct ProductCatalog {
    data: CatalogData,
    // (partition, position) pairs in recommended → popular → marketing order.
    order: Vec<(PartitionKey, usize)>,
}

impl ProductCatalog {
    /// Load and validate a catalog file.
    ///
    /// The file is read once; typed decoding runs on the same document the
    /// schema accepted.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        Self::from_value(value, &path.display().to_string())
            .with_context(|| format!("loading {}", path.display()))
    }

    /// Parse and validate a catalog held in memory.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source).context("parsing catalog JSON")?;
        Self::from_value(value, "<inline>")
    }

    fn from_value(value: Value, origin: &str) -> Result<Self> {
        validate_against_schema(&value, origin)?;
        let data: CatalogData =
            serde_json::from_value(value).context("decoding catalog partitions")?;
        Self::from_data(data)
    }

    /// The catalog compiled into the crate from `data/products.json`.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG).context("loading bundled catalog")
    }

    /// Build from already-decoded partitions, applying semantic checks.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        validate_products(&data)?;
        let order = PartitionKey::ALL
            .iter()
            .flat_map(|&key| (0..data.partition(key).len()).map(move |idx| (key, idx)))
            .collect::<Vec<_>>();
        debug!(
            recommended = data.recommended.len(),
            popular = data.popular.len(),
            marketing = data.marketing.len(),
            "catalog ready"
        );
        Ok(Self { data, order })
    }

    /// All three partitions as stored.
    pub fn partitions(&self) -> &CatalogData {
        &self.data
    }

    pub fn partition(&self, key: PartitionKey) -> &[Product] {
        self.data.partition(key)
    }

    /// Every product in recommended → popular → marketing order.
    pub fn all(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order
            .iter()
            .map(|&(key, idx)| &self.data.partition(key)[idx])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First product in [`ProductCatalog::all`] order whose id matches.
    ///
    /// A miss is `None`; callers render their own not-found state.
    pub fn by_id(&self, id: impl Into<IdQuery>) -> Option<&Product> {
        let query = id.into();
        let found = self.all().find(|product| product.id.matches(&query));
        trace!(query = query.text(), hit = found.is_some(), "catalog lookup");
        found
    }
}

fn validate_against_schema(value: &Value, origin: &str) -> Result<()> {
    let schema = CatalogSchema::bundled()?;
    schema.validate(value, origin)
}

fn validate_products(data: &CatalogData) -> Result<()> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for key in PartitionKey::ALL {
        for (idx, product) in data.partition(key).iter().enumerate() {
            if product.id.is_blank() {
                bail!("{key}[{idx}] has an empty id");
            }
            if product.title.trim().is_empty() {
                bail!("{key}[{idx}] (id {}) has an empty title", product.id);
            }
            if !seen.insert(product.id.as_text()) {
                warn!(
                    id = %product.id,
                    partition = %key,
                    "duplicate product id; lookups return the first entry"
                );
            }
        }
    }
    Ok(())
}
