//! The two marketplace routes and the pages they render.

use crate::catalog::{CatalogAccessError, CatalogScope, PartitionKey};
use crate::section::{ProductSection, SectionLayout, SectionSpec, SectionView};
use crate::view::DetailPage;
use serde::Serialize;
use std::fmt;

pub const MARKETPLACE_HEADING: &str = "Marketplace";
pub const MARKETPLACE_TAGLINE: &str =
    "Your one-stop marketplace for electronic products, and software.";

const PRODUCT_PREFIX: &str = "/product/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Detail page; the id is the percent-decoded path segment.
    Product(String),
}

impl Route {
    /// Match a path against `/` and `/product/{id}`.
    ///
    /// A trailing slash is tolerated; an empty id or extra segments do not
    /// match. The id segment is percent-decoded, so `%2F` yields a `/`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        if trimmed == "/" || trimmed.is_empty() {
            return Some(Route::Home);
        }
        let segment = trimmed.strip_prefix(PRODUCT_PREFIX)?;
        if segment.is_empty() || segment.contains('/') {
            return None;
        }
        let id = urlencoding::decode(segment).ok()?;
        if id.is_empty() {
            return None;
        }
        Some(Route::Product(id.into_owned()))
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Product(id) => format!("{PRODUCT_PREFIX}{}", urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Sections on the home page, in display order.
pub fn home_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec::new("Recommended for you", PartitionKey::Recommended),
        SectionSpec::new("Popular", PartitionKey::Popular),
        SectionSpec::new("Marketing", PartitionKey::Marketing),
    ]
}

#[derive(Debug)]
/// Mounted home page: owns each section and its cursor.
pub struct HomePage<'a> {
    sections: Vec<ProductSection<'a>>,
}

impl<'a> HomePage<'a> {
    pub fn mount(scope: &'a CatalogScope) -> Result<Self, CatalogAccessError> {
        Self::mount_with(home_sections(), scope)
    }

    pub fn mount_with(
        specs: Vec<SectionSpec>,
        scope: &'a CatalogScope,
    ) -> Result<Self, CatalogAccessError> {
        let sections = specs
            .into_iter()
            .map(|spec| ProductSection::mount(spec, scope))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[ProductSection<'a>] {
        &self.sections
    }

    /// First carousel section, if any.
    pub fn carousel_mut(&mut self) -> Option<&mut ProductSection<'a>> {
        self.sections
            .iter_mut()
            .find(|section| section.layout() == SectionLayout::Carousel)
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            heading: MARKETPLACE_HEADING.to_string(),
            tagline: MARKETPLACE_TAGLINE.to_string(),
            sections: self.sections.iter().map(ProductSection::view).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub heading: String,
    pub tagline: String,
    pub sections: Vec<SectionView>,
}

impl HomeView {
    pub fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        writeln!(writer, "# {}", self.heading)?;
        writeln!(writer, "{}", self.tagline)?;
        for section in &self.sections {
            writeln!(writer)?;
            section.render(writer)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
/// A fully rendered route.
pub enum Page {
    Home(HomeView),
    Product(DetailPage),
}

impl Page {
    pub fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Page::Home(home) => home.render(writer),
            Page::Product(detail) => detail.render(writer),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, ProductCatalog};

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(
            Route::parse("/product/3"),
            Some(Route::Product("3".to_string()))
        );
        assert_eq!(
            Route::parse("/product/woocommerce/"),
            Some(Route::Product("woocommerce".to_string()))
        );
        assert_eq!(Route::parse("/product/"), None);
        assert_eq!(Route::parse("/product/a/b"), None);
        assert_eq!(Route::parse("/cart"), None);
    }

    #[test]
    fn href_round_trips_through_parse() {
        let route = Route::Product("42".to_string());
        assert_eq!(route.href(), "/product/42");
        assert_eq!(Route::parse(&route.href()), Some(route));
        assert_eq!(Route::parse(&Route::Home.to_string()), Some(Route::Home));
    }

    #[test]
    fn ids_with_reserved_characters_survive_the_link() {
        let route = Route::Product("bundles/pro kit".to_string());
        assert_eq!(route.href(), "/product/bundles%2Fpro%20kit");
        assert_eq!(Route::parse(&route.href()), Some(route));
        assert_eq!(
            Route::parse("/product/shipping-labels"),
            Some(Route::Product("shipping-labels".to_string()))
        );
        assert_eq!(Route::parse("/product/%FF"), None);
    }

    #[test]
    fn home_page_has_three_sections_in_order() {
        let provider = CatalogProvider::new(ProductCatalog::bundled().unwrap());
        let scope = provider.scope();
        let mut home = HomePage::mount(&scope).unwrap();
        let layouts: Vec<SectionLayout> = home.sections().iter().map(|s| s.layout()).collect();
        assert_eq!(
            layouts,
            [
                SectionLayout::Carousel,
                SectionLayout::Grid,
                SectionLayout::Grid
            ]
        );
        let carousel = home.carousel_mut().expect("carousel section");
        assert_eq!(carousel.spec().partition, PartitionKey::Recommended);

        let text = Page::Home(home.view()).to_text();
        assert!(text.starts_with("# Marketplace\n"));
        let recommended = text.find("## Recommended for you").unwrap();
        let popular = text.find("## Popular").unwrap();
        let marketing = text.find("## Marketing").unwrap();
        assert!(recommended < popular && popular < marketing);
    }

    #[test]
    fn home_page_requires_a_provider() {
        let scope = CatalogScope::detached();
        assert_eq!(
            HomePage::mount(&scope).unwrap_err(),
            CatalogAccessError::OutsideProvider
        );
    }
}
