//! Application events
//!
//! Every user action and the catalog fetch outcome arrive as one
//! [`AppEvent`] handled by [`super::AppState::update`].

use crate::catalog::{CatalogOutcome, CategoryFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Startup fetch finished
    CatalogLoaded(CatalogOutcome),

    // ========== Filter ==========
    SelectCategory(CategoryFilter),

    // ========== Selection Staging ==========
    /// Open the staging dialog for a catalog item
    OpenItem(String),
    IncrementStaged,
    DecrementStaged,
    CancelStaged,
    ConfirmStaged,

    // ========== Cart Lines ==========
    /// "+" on a cart line
    AddOne(String),
    /// "-" on a cart line
    RemoveOne(String),

    // ========== Checkout Flow ==========
    RequestCheckout,
    ConfirmCheckout,
    Dismiss,
}
