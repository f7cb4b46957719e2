//! Summary cards: the grid card and the carousel card.

use crate::catalog::Product;
use crate::view::{NavLink, write_wrapped};
use serde::Serialize;
use std::fmt;

/// Badge shown on carousel cards whose product has no label.
pub const RECOMMENDED_BADGE: &str = "Recommended";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Grid card for one product.
pub struct ProductCard {
    pub glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub title: String,
    pub link: NavLink,
    pub description: String,
    pub price: String,
    pub arrow: NavLink,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let href = product.href();
        Self {
            glyph: product.glyph().map(String::from).unwrap_or_default(),
            badge: product.badge().map(str::to_string),
            title: product.title.clone(),
            link: NavLink::new(product.title.clone(), href.clone()),
            description: product.description.clone(),
            price: product.price.clone(),
            arrow: NavLink::new(format!("View {}", product.title), href),
        }
    }

    pub fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        match &self.badge {
            Some(badge) => writeln!(writer, "[{}] {}  <{}>", self.glyph, self.title, badge)?,
            None => writeln!(writer, "[{}] {}", self.glyph, self.title)?,
        }
        write_wrapped(writer, "    ", &self.description)?;
        writeln!(writer, "    From {}  → {}", self.price, self.link.href)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Carousel card for one recommended product.
pub struct RecommendedCard {
    pub badge: String,
    pub title: String,
    pub link: NavLink,
    pub description: String,
    pub action: String,
    pub price: String,
}

impl RecommendedCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            badge: product.badge().unwrap_or(RECOMMENDED_BADGE).to_string(),
            title: product.title.clone(),
            link: NavLink::new(product.title.clone(), product.href()),
            description: product.description.clone(),
            action: "Install".to_string(),
            price: product.price.clone(),
        }
    }

    pub fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        writeln!(writer, "<{}> {}", self.badge, self.title)?;
        write_wrapped(writer, "    ", &self.description)?;
        writeln!(
            writer,
            "    [{}]  {}  → {}",
            self.action, self.price, self.link.href
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn grid_card_uses_first_letter_and_links_to_detail() {
        let card = ProductCard::from_product(&product(json!({
            "id": 3,
            "title": "Échange",
            "description": "Sync stock",
            "price": "$29",
            "label": "New"
        })));
        assert_eq!(card.glyph, "É");
        assert_eq!(card.link.href, "/product/3");
        assert_eq!(card.arrow.label, "View Échange");
        assert_eq!(card.badge.as_deref(), Some("New"));

        let mut out = String::new();
        card.render(&mut out).unwrap();
        assert!(out.starts_with("[É] Échange  <New>\n"));
        assert!(out.contains("From $29"));
    }

    #[test]
    fn grid_card_omits_missing_badge() {
        let card = ProductCard::from_product(&product(json!({
            "id": "crm",
            "title": "CRM",
            "description": "",
            "price": "Free"
        })));
        assert!(card.badge.is_none());
        let value = serde_json::to_value(&card).unwrap();
        assert!(value.get("badge").is_none());

        let mut out = String::new();
        card.render(&mut out).unwrap();
        assert_eq!(out, "[C] CRM\n    From Free  → /product/crm\n");
    }

    #[test]
    fn carousel_card_falls_back_to_recommended_badge() {
        let plain = RecommendedCard::from_product(&product(json!({
            "id": 1, "title": "Payments", "description": "Take cards", "price": "$0"
        })));
        assert_eq!(plain.badge, RECOMMENDED_BADGE);
        assert_eq!(plain.action, "Install");

        let labelled = RecommendedCard::from_product(&product(json!({
            "id": 2, "title": "Ads", "description": "", "price": "$5", "label": "Hot"
        })));
        assert_eq!(labelled.badge, "Hot");
        let mut out = String::new();
        labelled.render(&mut out).unwrap();
        assert_eq!(out, "<Hot> Ads\n    [Install]  $5  → /product/2\n");
    }
}
