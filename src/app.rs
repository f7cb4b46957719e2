//! Application shell: owns the catalog provider and renders routes.

use crate::catalog::{CatalogProvider, CatalogScope, ProductCatalog};
use crate::routes::{HomePage, Page, Route};
use crate::view::DetailPage;
use anyhow::{Result, anyhow};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Marketplace {
    provider: CatalogProvider,
    scope: CatalogScope,
}

impl Marketplace {
    pub fn new(catalog: ProductCatalog) -> Self {
        let provider = CatalogProvider::new(catalog);
        let scope = provider.scope();
        Self { provider, scope }
    }

    pub fn provider(&self) -> &CatalogProvider {
        &self.provider
    }

    pub fn scope(&self) -> &CatalogScope {
        &self.scope
    }

    /// Mount the home page; its cursors live as long as the returned value.
    pub fn home(&self) -> Result<HomePage<'_>> {
        Ok(HomePage::mount(&self.scope)?)
    }

    pub fn detail(&self, id: &str) -> Result<DetailPage> {
        Ok(DetailPage::resolve(&self.scope, id)?)
    }

    /// Render `route` with a freshly mounted page.
    pub fn render(&self, route: &Route) -> Result<Page> {
        info!(route = %route, "rendering");
        match route {
            Route::Home => Ok(Page::Home(self.home()?.view())),
            Route::Product(id) => Ok(Page::Product(self.detail(id)?)),
        }
    }

    /// Parse `path` and render it; unknown paths are an error.
    pub fn navigate(&self, path: &str) -> Result<Page> {
        let route = Route::parse(path).ok_or_else(|| anyhow!("no route matches '{path}'"))?;
        self.render(&route)
    }
}
