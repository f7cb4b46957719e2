use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Named partition of the catalog.
///
/// The declaration order is the display order of the flattened catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PartitionKey {
    Recommended,
    Popular,
    Marketing,
}

impl PartitionKey {
    pub const ALL: [PartitionKey; 3] = [
        PartitionKey::Recommended,
        PartitionKey::Popular,
        PartitionKey::Marketing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartitionKey::Recommended => "recommended",
            PartitionKey::Popular => "popular",
            PartitionKey::Marketing => "marketing",
        }
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PartitionKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Identifier of a catalog product.
///
/// Catalog files store ids either as JSON strings or JSON numbers. Both are
/// kept in their original representation so they serialize back unchanged;
/// [`ProductId::matches`] applies the lookup rules against an [`IdQuery`].
#[derive(Clone, Debug, PartialEq)]
pub enum ProductId {
    Text(String),
    Number(serde_json::Number),
}

impl ProductId {
    /// String form used in routes and display.
    pub fn as_text(&self) -> String {
        match self {
            ProductId::Text(value) => value.clone(),
            ProductId::Number(value) => value.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, ProductId::Text(value) if value.trim().is_empty())
    }

    /// Text ids match on exact text. Numeric ids match on their string form
    /// or on numeric value when the query parses as a finite number.
    pub fn matches(&self, query: &IdQuery) -> bool {
        match self {
            ProductId::Text(value) => value == query.text(),
            ProductId::Number(value) => {
                if value.to_string() == query.text() {
                    return true;
                }
                match (value.as_f64(), query.numeric()) {
                    (Some(stored), Some(wanted)) => stored == wanted,
                    _ => false,
                }
            }
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Text(value) => f.write_str(value),
            ProductId::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId::Number(value.into())
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ProductId::Text(value) => serializer.serialize_str(value),
            ProductId::Number(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ProductIdVisitor)
    }
}

struct ProductIdVisitor;

impl<'de> Visitor<'de> for ProductIdVisitor {
    type Value = ProductId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or numeric product id")
    }

    fn visit_str<E>(self, value: &str) -> Result<ProductId, E>
    where
        E: de::Error,
    {
        Ok(ProductId::Text(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<ProductId, E>
    where
        E: de::Error,
    {
        Ok(ProductId::Text(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<ProductId, E>
    where
        E: de::Error,
    {
        Ok(ProductId::Number(value.into()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<ProductId, E>
    where
        E: de::Error,
    {
        Ok(ProductId::Number(value.into()))
    }

    fn visit_f64<E>(self, value: f64) -> Result<ProductId, E>
    where
        E: de::Error,
    {
        serde_json::Number::from_f64(value)
            .map(ProductId::Number)
            .ok_or_else(|| E::custom("product id must be a finite number"))
    }
}

/// Normalized lookup key.
///
/// Queries arrive as route segments (text) or as native numbers; both are
/// reduced to a text form plus an optional numeric value once, at
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct IdQuery {
    text: String,
    numeric: Option<f64>,
}

impl IdQuery {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn numeric(&self) -> Option<f64> {
        self.numeric
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    // `f64::from_str` accepts "inf" and "NaN"; only finite values can equal an id.
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

impl From<&str> for IdQuery {
    fn from(value: &str) -> Self {
        Self {
            text: value.to_string(),
            numeric: parse_numeric(value),
        }
    }
}

impl From<String> for IdQuery {
    fn from(value: String) -> Self {
        let numeric = parse_numeric(&value);
        Self {
            text: value,
            numeric,
        }
    }
}

impl From<&String> for IdQuery {
    fn from(value: &String) -> Self {
        IdQuery::from(value.as_str())
    }
}

impl From<u64> for IdQuery {
    fn from(value: u64) -> Self {
        Self {
            text: value.to_string(),
            numeric: Some(value as f64),
        }
    }
}

impl From<i64> for IdQuery {
    fn from(value: i64) -> Self {
        Self {
            text: value.to_string(),
            numeric: Some(value as f64),
        }
    }
}

impl From<i32> for IdQuery {
    fn from(value: i32) -> Self {
        IdQuery::from(i64::from(value))
    }
}

impl From<&ProductId> for IdQuery {
    fn from(value: &ProductId) -> Self {
        IdQuery::from(value.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_deserialize_from_strings_and_numbers() {
        let text: ProductId = serde_json::from_str("\"woocommerce\"").unwrap();
        assert_eq!(text, ProductId::Text("woocommerce".to_string()));

        let number: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(number, ProductId::from(7u64));
        assert_eq!(serde_json::to_string(&number).unwrap(), "7");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"woocommerce\"");
    }

    #[test]
    fn ids_reject_other_json_types() {
        assert!(serde_json::from_str::<ProductId>("true").is_err());
        assert!(serde_json::from_str::<ProductId>("null").is_err());
        assert!(serde_json::from_str::<ProductId>("[1]").is_err());
    }

    #[test]
    fn numeric_id_matches_native_string_and_numeric_forms() {
        let id = ProductId::from(7u64);
        assert!(id.matches(&IdQuery::from(7u64)));
        assert!(id.matches(&IdQuery::from("7")));
        assert!(id.matches(&IdQuery::from("07")));
        assert!(id.matches(&IdQuery::from("7.0")));
        assert!(!id.matches(&IdQuery::from("8")));
        assert!(!id.matches(&IdQuery::from("seven")));
    }

    #[test]
    fn text_id_matches_exact_text_only() {
        let id = ProductId::from("7");
        assert!(id.matches(&IdQuery::from("7")));
        assert!(id.matches(&IdQuery::from(7u64)));
        assert!(!id.matches(&IdQuery::from("07")));

        let slug = ProductId::from("woocommerce");
        assert!(slug.matches(&IdQuery::from("woocommerce")));
        assert!(!slug.matches(&IdQuery::from("WooCommerce")));
    }

    #[test]
    fn blank_and_non_finite_queries_carry_no_numeric_value() {
        assert_eq!(IdQuery::from("").numeric(), None);
        assert_eq!(IdQuery::from("   ").numeric(), None);
        assert_eq!(IdQuery::from("inf").numeric(), None);
        assert_eq!(IdQuery::from("NaN").numeric(), None);
        assert!(!ProductId::from(0u64).matches(&IdQuery::from("")));
    }

    #[test]
    fn partition_keys_keep_display_order() {
        let names: Vec<&str> = PartitionKey::ALL.iter().map(|key| key.as_str()).collect();
        assert_eq!(names, ["recommended", "popular", "marketing"]);
        assert_eq!(PartitionKey::Popular.to_string(), "popular");
        assert_eq!(
            serde_json::to_string(&PartitionKey::Marketing).unwrap(),
            "\"marketing\""
        );
    }
}
