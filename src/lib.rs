//! Shared library for the marketplace browser.
//!
//! The crate exposes the read-only product catalog, the paginator used by the
//! carousel, the section composer, and the card/detail view models. Everything
//! hangs off a `ProductCatalog` built once at startup and reached through a
//! `CatalogScope`; nothing here mutates catalog data after load.

pub mod app;
pub mod catalog;
pub mod paginate;
pub mod routes;
pub mod runtime;
pub mod section;
pub mod view;

mod schema_loader;

pub use app::Marketplace;
pub use catalog::{
    CatalogAccessError, CatalogData, CatalogProvider, CatalogScope, DEFAULT_CATEGORY, Feature,
    IdQuery, PartitionKey, Product, ProductCatalog, ProductId,
};
pub use paginate::{SLIDE_WIDTH, page_count, paginate};
pub use routes::{HomePage, HomeView, Page, Route, home_sections};
pub use runtime::{CATALOG_ENV, CatalogSource, LOG_ENV, init_tracing};
pub use section::{
    CarouselCursor, CarouselView, ProductSection, SectionBody, SectionLayout, SectionSpec,
    SectionView,
};
pub use view::{DetailPage, NavLink, ProductCard, ProductDetail, RecommendedCard};
