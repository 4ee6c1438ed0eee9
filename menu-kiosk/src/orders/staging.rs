//! SelectionStaging - the item being configured before it enters the cart

use shared::models::MenuItem;
use tracing::debug;

use super::cart::CartStore;

/// Staged item and quantity
///
/// Quantity never drops below 1 and has no upper bound.
#[derive(Debug, Clone)]
pub struct SelectionStaging {
    item: Option<MenuItem>,
    quantity: u32,
}

impl Default for SelectionStaging {
    fn default() -> Self {
        Self {
            item: None,
            quantity: 1,
        }
    }
}

impl SelectionStaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self) -> Option<&MenuItem> {
        self.item.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }

    /// Stage `item` with quantity 1, replacing any previous selection
    pub fn open(&mut self, item: MenuItem) {
        debug!(item_id = %item.id, "Selection opened");
        self.item = Some(item);
        self.quantity = 1;
    }

    pub fn increment(&mut self) {
        if self.is_open() {
            self.quantity = self.quantity.saturating_add(1);
        }
    }

    pub fn decrement(&mut self) {
        if self.is_open() {
            self.quantity = self.quantity.saturating_sub(1).max(1);
        }
    }

    /// Discard the selection; the cart is not touched
    pub fn cancel(&mut self) {
        if let Some(item) = self.item.take() {
            debug!(item_id = %item.id, "Selection cancelled");
        }
        self.quantity = 1;
    }

    /// Commit the staged quantity to the cart and close the selection
    ///
    /// The copies are appended to the cart as currently persisted (see
    /// [`CartStore::add_entries`]), so entries written through another path
    /// since the cart was loaded are kept. Returns the committed item id and
    /// quantity, or `None` when nothing was staged.
    pub fn confirm(&mut self, cart: &mut CartStore) -> Option<(String, u32)> {
        let item = self.item.take()?;
        let quantity = std::mem::replace(&mut self.quantity, 1);

        cart.add_entries(&item, quantity);
        debug!(item_id = %item.id, quantity, "Selection confirmed");

        Some((item.id, quantity))
    }
}
