//! View models for product cards and the product detail page.
//!
//! Each view is built from catalog data only, serializes to JSON for
//! machine consumers, and renders to plain text through `fmt::Write`.
//! Optional product fields are either given their default or left out of the
//! output entirely.

pub mod card;
pub mod detail;

pub use card::{ProductCard, RecommendedCard};
pub use detail::{DetailPage, InfoRow, NotFound, ProductDetail};

use serde::Serialize;
use std::fmt;

/// Route of the marketplace home page.
pub const HOME_HREF: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Something the user can activate to navigate.
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn home(label: impl Into<String>) -> Self {
        Self::new(label, HOME_HREF)
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.label, self.href)
    }
}

fn write_wrapped(writer: &mut impl fmt::Write, indent: &str, text: &str) -> fmt::Result {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    for line in trimmed.lines() {
        writeln!(writer, "{indent}{}", line.trim_end())?;
    }
    Ok(())
}
