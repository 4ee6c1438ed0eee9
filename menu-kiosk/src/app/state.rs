//! Application state and its update function

use shared::models::MenuItem;
use shared::order::{CartLine, Modal};
use thiserror::Error;
use tracing::debug;

use super::AppEvent;
use crate::catalog::{CatalogStatus, CategoryFilter, MenuCatalog, visible_items};
use crate::orders::{CartStore, FlowError, FlowTrigger, OrderFlow, SelectionStaging};

/// Errors from handling a single event
///
/// None of these change state; callers log and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("No item is staged")]
    NothingStaged,

    #[error(transparent)]
    Flow(#[from] FlowError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Whole client state
pub struct AppState {
    catalog: MenuCatalog,
    cart: CartStore,
    staging: SelectionStaging,
    flow: OrderFlow,
    filter: CategoryFilter,
}

impl AppState {
    /// Create the state around a rehydrated cart; the catalog starts loading
    pub fn new(cart: CartStore) -> Self {
        Self {
            catalog: MenuCatalog::new(),
            cart,
            staging: SelectionStaging::new(),
            flow: OrderFlow::new(),
            filter: CategoryFilter::All,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn staging(&self) -> &SelectionStaging {
        &self.staging
    }

    pub fn modal(&self) -> Modal {
        self.flow.modal()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    pub fn visible_items(&self) -> Vec<&MenuItem> {
        visible_items(self.catalog.items(), &self.filter)
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.grouped_view()
    }

    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    pub fn catalog_error(&self) -> Option<&str> {
        match self.catalog.status() {
            CatalogStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Handle one event
    pub fn update(&mut self, event: AppEvent) -> AppResult<()> {
        debug!(?event, "Handling event");

        match event {
            AppEvent::CatalogLoaded(outcome) => {
                self.catalog.apply(outcome);
            }
            AppEvent::SelectCategory(filter) => {
                self.filter = filter;
            }
            AppEvent::OpenItem(id) => {
                let item = self
                    .catalog
                    .find(&id)
                    .cloned()
                    .ok_or(AppError::UnknownItem(id))?;
                self.staging.open(item);
            }
            AppEvent::IncrementStaged => self.staging.increment(),
            AppEvent::DecrementStaged => self.staging.decrement(),
            AppEvent::CancelStaged => self.staging.cancel(),
            AppEvent::ConfirmStaged => {
                self.staging
                    .confirm(&mut self.cart)
                    .ok_or(AppError::NothingStaged)?;
            }
            AppEvent::AddOne(id) => {
                // The cart's cached copy wins so stale lines keep their price.
                let item = self
                    .cart
                    .find(&id)
                    .or_else(|| self.catalog.find(&id))
                    .cloned()
                    .ok_or(AppError::UnknownItem(id))?;
                self.cart.add_one(&item);
            }
            AppEvent::RemoveOne(id) => {
                self.cart.remove_one(&id);
            }
            AppEvent::RequestCheckout => {
                self.flow.apply(FlowTrigger::RequestCheckout, &mut self.cart)?;
            }
            AppEvent::ConfirmCheckout => {
                self.flow.apply(FlowTrigger::ConfirmCheckout, &mut self.cart)?;
            }
            AppEvent::Dismiss => {
                self.flow.apply(FlowTrigger::Dismiss, &mut self.cart)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOutcome;
    use crate::orders::CartStorage;

    fn loaded_state() -> AppState {
        let cart = CartStore::open(CartStorage::open_in_memory().unwrap());
        let mut state = AppState::new(cart);
        state
            .update(AppEvent::CatalogLoaded(CatalogOutcome::Loaded(vec![
                MenuItem::new("a", "A", 500).with_category("麺類"),
                MenuItem::new("b", "B", 300),
            ])))
            .unwrap();
        state
    }

    #[test]
    fn test_open_unknown_item_is_rejected() {
        let mut state = loaded_state();
        let err = state.update(AppEvent::OpenItem("zzz".into())).unwrap_err();
        assert_eq!(err, AppError::UnknownItem("zzz".into()));
        assert!(!state.staging().is_open());
    }

    #[test]
    fn test_confirm_without_selection() {
        let mut state = loaded_state();
        assert_eq!(
            state.update(AppEvent::ConfirmStaged),
            Err(AppError::NothingStaged)
        );
    }

    #[test]
    fn test_cart_line_buttons() {
        let mut state = loaded_state();
        state.update(AppEvent::AddOne("a".into())).unwrap();
        state.update(AppEvent::AddOne("a".into())).unwrap();
        state.update(AppEvent::RemoveOne("a".into())).unwrap();

        assert_eq!(state.cart().quantity_of("a"), 1);
        assert_eq!(state.total(), 500);
    }

    #[test]
    fn test_invalid_flow_trigger_surfaces_error() {
        let mut state = loaded_state();
        let err = state.update(AppEvent::ConfirmCheckout).unwrap_err();
        assert!(matches!(err, AppError::Flow(_)));
        assert_eq!(state.modal(), Modal::None);
    }

    #[test]
    fn test_filter_selection() {
        let mut state = loaded_state();
        state
            .update(AppEvent::SelectCategory(CategoryFilter::only("麺類")))
            .unwrap();

        let ids: Vec<&str> = state.visible_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        assert_eq!(state.cart().len(), 0);
    }
}
