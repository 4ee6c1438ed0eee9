//! Menu catalog
//!
//! - **fetch**: one-shot background fetch from the catalog source
//! - **category**: category labels and filtering
//!
//! The catalog is populated once from the first fetch outcome and is
//! read-only afterwards.

pub mod category;
pub mod fetch;

pub use category::{ALL_LABEL, CategoryFilter, categories, visible_items};
pub use fetch::{CatalogSource, load_catalog, spawn_catalog_fetch};

use shared::models::MenuItem;

/// Outcome of the startup fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    Loaded(Vec<MenuItem>),
    Failed(String),
}

/// Where the catalog is in its lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    /// Fetch failed; the menu stays empty
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    status: CatalogStatus,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.items)
    }

    /// Populate from the fetch outcome
    ///
    /// Only the first outcome is applied; returns `false` if it was ignored.
    pub fn apply(&mut self, outcome: CatalogOutcome) -> bool {
        if self.status != CatalogStatus::Loading {
            tracing::warn!("Catalog already populated, ignoring outcome");
            return false;
        }

        match outcome {
            CatalogOutcome::Loaded(items) => {
                self.items = items;
                self.status = CatalogStatus::Loaded;
            }
            CatalogOutcome::Failed(reason) => {
                self.status = CatalogStatus::Failed(reason);
            }
        }
        true
    }
}
