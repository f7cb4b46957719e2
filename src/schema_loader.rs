//! JSON Schema loader for catalog documents.
//!
//! The catalog schema ships inside the binary so a catalog file can be
//! validated before any typed parsing happens; schema violations are reported
//! with every failing instance path at once.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const BUNDLED_CATALOG_SCHEMA: &str = include_str!("../schema/catalog.schema.json");
const SCHEMA_VERSION_POINTER: &str = "/schema_version";

/// Compiled catalog schema plus the version it declares.
pub(crate) struct CatalogSchema {
    pub schema_version: String,
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Compile the schema compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let value: Value = serde_json::from_str(BUNDLED_CATALOG_SCHEMA)
            .context("parsing bundled catalog schema")?;
        Self::from_value(&value).context("compiling bundled catalog schema")
    }

    fn from_value(value: &Value) -> Result<Self> {
        let schema_version = extract_schema_version(value)
            .ok_or_else(|| anyhow!("schema missing a valid schema_version"))?;
        let compiled = JSONSchema::compile(value).map_err(|err| anyhow!("{err}"))?;
        Ok(Self {
            schema_version,
            compiled,
        })
    }

    /// Validate `instance`, collecting every violation into one error.
    pub fn validate(&self, instance: &Value, origin: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", display_pointer(&err.instance_path.to_string()), err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "catalog {} failed {} validation:\n{}",
                origin,
                self.schema_version,
                details
            );
        }
        Ok(())
    }
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() { "/" } else { pointer }
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_schema_compiles_with_version() {
        let schema = CatalogSchema::bundled().expect("bundled schema");
        assert_eq!(schema.schema_version, "marketplace_catalog_v1");
    }

    #[test]
    fn accepts_minimal_catalog() {
        let schema = CatalogSchema::bundled().unwrap();
        let doc = json!({
            "recommended": [{"id": 1, "title": "A", "description": "", "price": "$1"}],
            "popular": [],
            "marketing": []
        });
        schema.validate(&doc, "inline").expect("valid catalog");
    }

    #[test]
    fn reports_every_violation() {
        let schema = CatalogSchema::bundled().unwrap();
        let doc = json!({
            "recommended": [{"id": true, "title": "", "description": "", "price": "$1"}],
            "popular": []
        });
        let err = schema.validate(&doc, "inline").unwrap_err().to_string();
        assert!(err.contains("marketplace_catalog_v1"), "{err}");
        assert!(err.contains("/recommended/0/title"), "{err}");
        assert!(err.contains("/recommended/0/id"), "{err}");
        assert!(err.contains("marketing"), "{err}");
    }

    #[test]
    fn rejects_schema_without_version() {
        let err = CatalogSchema::from_value(&json!({"type": "object"}))
            .err()
            .expect("missing version");
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn custom_schema_enforces_its_own_rules() {
        let schema = CatalogSchema::from_value(&json!({
            "schema_version": "custom_v2",
            "type": "object",
            "required": ["popular"]
        }))
        .unwrap();
        assert_eq!(schema.schema_version, "custom_v2");
        assert!(schema.validate(&json!({}), "inline").is_err());
        assert!(schema.validate(&json!({"popular": []}), "inline").is_ok());
    }
}
