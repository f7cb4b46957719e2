//! Deserializable representation of the bundled `data/products.json`.
//!
//! The types mirror `schema/catalog.schema.json`. Use `ProductCatalog` for
//! validation and lookup; these structs are the raw partitions as stored.

use crate::catalog::identity::{PartitionKey, ProductId};
use crate::routes::Route;
use serde::{Deserialize, Serialize};

/// Category shown when a product does not declare one.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
/// The three named partitions, each in display order.
pub struct CatalogData {
    pub recommended: Vec<Product>,
    pub popular: Vec<Product>,
    pub marketing: Vec<Product>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// A single catalog entry.
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Pre-formatted display string; never parsed.
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
/// One highlighted feature on the detail page.
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl CatalogData {
    pub fn partition(&self, key: PartitionKey) -> &[Product] {
        match key {
            PartitionKey::Recommended => &self.recommended,
            PartitionKey::Popular => &self.popular,
            PartitionKey::Marketing => &self.marketing,
        }
    }
}

impl Product {
    /// Route of the detail page for this product.
    pub fn href(&self) -> String {
        Route::Product(self.id.as_text()).href()
    }

    pub fn category_or_default(&self) -> &str {
        self.category
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Features, or `None` when absent or empty.
    pub fn listed_features(&self) -> Option<&[Feature]> {
        self.features
            .as_deref()
            .filter(|features| !features.is_empty())
    }

    /// First character of the title, used as the card thumbnail.
    pub fn glyph(&self) -> Option<char> {
        self.title.chars().next()
    }

    pub fn badge(&self) -> Option<&str> {
        self.label.as_deref().filter(|value| !value.is_empty())
    }
}
