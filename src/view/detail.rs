//! Product detail page and its not-found state.

use crate::catalog::{CatalogAccessError, CatalogScope, Feature, IdQuery, Product};
use crate::view::{NavLink, write_wrapped};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
/// Outcome of resolving `/product/{id}`.
pub enum DetailPage {
    Found(ProductDetail),
    NotFound(NotFound),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub back: NavLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub title: String,
    pub description: String,
    pub price: String,
    pub about: Vec<InfoRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One labelled line of the "About this product" card.
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFound {
    pub message: String,
    pub back: NavLink,
}

impl DetailPage {
    /// Look `id` up in the scoped catalog and build the page.
    pub fn resolve(
        scope: &CatalogScope,
        id: impl Into<IdQuery>,
    ) -> Result<Self, CatalogAccessError> {
        let catalog = scope.products()?;
        Ok(Self::from_lookup(catalog.by_id(id)))
    }

    pub fn from_lookup(product: Option<&Product>) -> Self {
        match product {
            Some(product) => DetailPage::Found(ProductDetail::from_product(product)),
            None => DetailPage::NotFound(NotFound::default()),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailPage::Found(_))
    }

    /// Link that leads back to the home page.
    pub fn back_link(&self) -> &NavLink {
        match self {
            DetailPage::Found(detail) => &detail.back,
            DetailPage::NotFound(missing) => &missing.back,
        }
    }

    pub fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        match self {
            DetailPage::Found(detail) => detail.render(writer),
            DetailPage::NotFound(missing) => missing.render(writer),
        }
    }
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        let mut about = vec![
            InfoRow::new("Category", product.category_or_default()),
            InfoRow::new("Product ID", product.id.as_text()),
        ];
        if let Some(compatibility) = product
            .compatibility
            .as_deref()
            .filter(|value| !value.is_empty())
        {
            about.push(InfoRow::new("Compatibility", compatibility));
        }

        Self {
            back: NavLink::home("← Back to Marketplace"),
            badge: product.badge().map(str::to_string),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            about,
            features: product.listed_features().map(<[Feature]>::to_vec),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.about
            .iter()
            .find(|row| row.label == "Category")
            .map(|row| row.value.as_str())
    }

    fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        writeln!(writer, "{}", self.back)?;
        writeln!(writer)?;
        if let Some(badge) = &self.badge {
            writeln!(writer, "<{badge}>")?;
        }
        writeln!(writer, "{}", self.title)?;
        writeln!(writer, "{}", "=".repeat(self.title.chars().count().max(3)))?;
        write_wrapped(writer, "", &self.description)?;
        writeln!(writer)?;
        writeln!(writer, "Starting at {}  [Add to Cart]", self.price)?;
        writeln!(writer)?;

        writeln!(writer, "About this product")?;
        writeln!(writer, "------------------")?;
        write_wrapped(writer, "", &self.description)?;
        let width = self
            .about
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0)
            + 1;
        for row in &self.about {
            writeln!(
                writer,
                "  {:<width$} {}",
                format!("{}:", row.label),
                row.value,
                width = width
            )?;
        }

        if let Some(features) = &self.features {
            writeln!(writer)?;
            writeln!(writer, "Key Features")?;
            writeln!(writer, "------------")?;
            for feature in features {
                writeln!(writer, "  {} {}", feature.icon, feature.title)?;
                write_wrapped(writer, "      ", &feature.description)?;
            }
        }
        Ok(())
    }
}

impl InfoRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

impl Default for NotFound {
    fn default() -> Self {
        Self {
            message: "Product not found".to_string(),
            back: NavLink::home("Back to Home"),
        }
    }
}

impl NotFound {
    fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        writeln!(writer, "! {}", self.message)?;
        writeln!(writer, "{}", self.back)
    }
}
