//! Per-run catalog context
//!
//! The catalog is fetched at most once per dataset for the lifetime of a
//! `CatalogContext`. Fetching the extended dataset also serves later requests
//! for the regular one, since it is a superset.

use crate::loader::catalog::Catalog;
use crate::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::Instant;

// MTG JSON v3 endpoints. mtgjson.com has since retired them, so downloads
// only work against a mirror; use a local file with `CatalogSource::File`.
pub const ALL_SETS_URL: &str = "https://mtgjson.com/json/AllSets.json";
pub const ALL_SETS_X_URL: &str = "https://mtgjson.com/json/AllSets-x.json";

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Download from MTG JSON
    Download,
    /// Read a local MTG JSON file (used for both datasets)
    File(PathBuf),
}

pub struct CatalogContext {
    source: CatalogSource,
    db: Option<Arc<Catalog>>,
    db_extended: Option<Arc<Catalog>>,
}

impl CatalogContext {
    pub fn new(source: CatalogSource) -> Self {
        CatalogContext {
            source,
            db: None,
            db_extended: None,
        }
    }

    /// Context backed by an already loaded catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        CatalogContext {
            source: CatalogSource::Download,
            db: Some(Arc::clone(&catalog)),
            db_extended: Some(catalog),
        }
    }

    /// Get the catalog, fetching it on first use
    pub async fn catalog(&mut self, extended: bool) -> Result<Arc<Catalog>> {
        let cached = if extended {
            &self.db_extended
        } else {
            &self.db
        };
        if let Some(catalog) = cached {
            tracing::debug!(extended, "using cached card catalog");
            return Ok(Arc::clone(catalog));
        }

        let start = Instant::now();
        let catalog = Arc::new(self.fetch(extended).await?);
        tracing::info!(
            extended,
            cards = catalog.len(),
            elapsed = ?start.elapsed(),
            "loaded card catalog"
        );
        if extended {
            self.db_extended = Some(Arc::clone(&catalog));
        }
        self.db = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    async fn fetch(&self, extended: bool) -> Result<Catalog> {
        let bytes = match &self.source {
            CatalogSource::File(path) => tokio::fs::read(path).await?,
            CatalogSource::Download => {
                let url = if extended { ALL_SETS_X_URL } else { ALL_SETS_URL };
                tracing::info!(url, "downloading MTG JSON");
                reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .bytes()
                    .await?
                    .to_vec()
            }
        };
        Catalog::from_json(&bytes)
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}
