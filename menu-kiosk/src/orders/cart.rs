//! CartStore - the customer's order as an ordered multiset of items
//!
//! The raw cart is a flat sequence of `MenuItem` copies; repeated purchases
//! of the same item are repeated entries. Quantities are derived by
//! grouping on `id` in order of first appearance.
//!
//! # Persistence
//!
//! Storage is the single source of truth. Every mutation re-reads the
//! persisted sequence, applies the change to that fresh copy, writes it
//! back and only then replaces the in-memory cache. A change written by
//! another handle on the same storage is therefore never lost.
//!
//! Storage failures are best-effort: they are logged and the in-memory
//! cache is used as the base instead.

use indexmap::IndexMap;
use shared::models::MenuItem;
use shared::order::CartLine;
use tracing::{debug, warn};

use super::storage::CartStorage;

pub struct CartStore {
    storage: CartStorage,
    entries: Vec<MenuItem>,
}

impl CartStore {
    /// Create a cart rehydrated from storage
    ///
    /// A missing, unreadable or corrupt slot yields an empty cart.
    pub fn open(storage: CartStorage) -> Self {
        let entries = match storage.load_cart() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to rehydrate cart, starting empty");
                Vec::new()
            }
        };

        debug!(entries = entries.len(), "Cart rehydrated");
        Self { storage, entries }
    }

    pub fn storage(&self) -> &CartStorage {
        &self.storage
    }

    /// Raw cart sequence in insertion order
    pub fn entries(&self) -> &[MenuItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `count` copies of `item`
    ///
    /// The copies are appended to the freshly read persisted sequence, not
    /// to the in-memory cache. A `count` of zero changes nothing.
    pub fn add_entries(&mut self, item: &MenuItem, count: u32) {
        if count == 0 {
            return;
        }

        let mut updated = self.read_fresh();
        updated.extend(std::iter::repeat_n(item.clone(), count as usize));

        debug!(item_id = %item.id, count, len = updated.len(), "Cart entries added");
        self.commit(updated);
    }

    /// Append a single copy of `item`
    pub fn add_one(&mut self, item: &MenuItem) {
        self.add_entries(item, 1);
    }

    /// Remove the first entry matching `id`
    ///
    /// Returns `false` (and writes nothing) when no entry matches.
    pub fn remove_one(&mut self, id: &str) -> bool {
        let mut updated = self.read_fresh();

        let Some(index) = updated.iter().position(|entry| entry.id == id) else {
            self.entries = updated;
            return false;
        };
        updated.remove(index);

        debug!(item_id = %id, len = updated.len(), "Cart entry removed");
        self.commit(updated);
        true
    }

    /// Empty the cart and erase the persisted slot
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.erase_cart() {
            warn!(error = %e, "Failed to erase persisted cart");
        }
        self.entries.clear();
        debug!("Cart cleared");
    }

    /// One line per distinct item, in order of first appearance
    pub fn grouped_view(&self) -> Vec<CartLine> {
        let mut lines: IndexMap<&str, CartLine> = IndexMap::new();

        for entry in &self.entries {
            lines
                .entry(entry.id.as_str())
                .and_modify(|line| line.quantity += 1)
                .or_insert_with(|| CartLine {
                    item: entry.clone(),
                    quantity: 1,
                });
        }

        lines.into_values().collect()
    }

    /// Derived quantity for one item id
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.entries.iter().filter(|entry| entry.id == id).count() as u32
    }

    /// Cached copy of an item held in the cart (survives catalog changes)
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Sum of `price` over the raw entries
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.price))
    }

    fn read_fresh(&self) -> Vec<MenuItem> {
        match self.storage.load_cart() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted cart, using in-memory copy");
                self.entries.clone()
            }
        }
    }

    fn commit(&mut self, updated: Vec<MenuItem>) {
        if let Err(e) = self.storage.save_cart(&updated) {
            warn!(error = %e, "Failed to persist cart");
        }
        self.entries = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: u64) -> MenuItem {
        MenuItem::new(id, id.to_uppercase(), price)
    }

    fn empty_cart() -> CartStore {
        CartStore::open(CartStorage::open_in_memory().unwrap())
    }

    fn ids(cart: &CartStore) -> Vec<&str> {
        cart.entries().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_add_entries_appends_copies() {
        let mut cart = empty_cart();
        cart.add_entries(&item("a", 500), 2);
        cart.add_one(&item("b", 300));

        assert_eq!(ids(&cart), vec!["a", "a", "b"]);
        assert_eq!(cart.total(), 1300);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = empty_cart();
        cart.add_entries(&item("a", 500), 0);

        assert!(cart.is_empty());
        assert!(cart.storage().load_cart().unwrap().is_none());
    }

    #[test]
    fn test_remove_one_removes_first_occurrence_only() {
        let mut cart = empty_cart();
        cart.add_one(&item("a", 500));
        cart.add_one(&item("b", 300));
        cart.add_one(&item("a", 500));

        assert!(cart.remove_one("a"));
        assert_eq!(ids(&cart), vec!["b", "a"]);
        assert_eq!(cart.quantity_of("a"), 1);
    }

    #[test]
    fn test_remove_absent_id_leaves_cart_unchanged() {
        let mut cart = empty_cart();
        cart.add_one(&item("a", 500));
        cart.add_one(&item("b", 300));

        assert!(!cart.remove_one("zzz"));
        assert_eq!(ids(&cart), vec!["a", "b"]);
    }

    #[test]
    fn test_grouped_view_keeps_first_appearance_order() {
        let mut cart = empty_cart();
        cart.add_one(&item("b", 300));
        cart.add_one(&item("a", 500));
        cart.add_one(&item("b", 300));
        cart.add_one(&item("c", 100));
        cart.add_one(&item("a", 500));

        let lines = cart.grouped_view();
        let summary: Vec<(&str, u32)> = lines
            .iter()
            .map(|l| (l.item.id.as_str(), l.quantity))
            .collect();
        assert_eq!(summary, vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_quantities_sum_to_length_across_mutations() {
        let mut cart = empty_cart();
        let catalog = [item("a", 500), item("b", 300), item("c", 120)];

        // Deterministic mix of adds and removes, including misses.
        for step in 0..60usize {
            let target = &catalog[step % catalog.len()];
            if step % 4 == 3 {
                cart.remove_one(&target.id);
            } else if step % 7 == 0 {
                cart.remove_one("missing");
            } else {
                cart.add_entries(target, (step % 3) as u32 + 1);
            }

            let lines = cart.grouped_view();
            let quantity_sum: u32 = lines.iter().map(|l| l.quantity).sum();
            assert_eq!(quantity_sum as usize, cart.len());

            let grouped_total: u64 = lines.iter().map(|l| l.subtotal()).sum();
            assert_eq!(grouped_total, cart.total());
        }
    }

    #[test]
    fn test_clear_erases_storage() {
        let mut cart = empty_cart();
        cart.add_entries(&item("a", 500), 3);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert!(cart.storage().load_cart().unwrap().is_none());
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut cart = empty_cart();
        cart.add_entries(&item("a", 500), 2);
        cart.remove_one("a");

        let persisted = cart.storage().load_cart().unwrap().unwrap();
        assert_eq!(persisted, cart.entries());
    }

    #[test]
    fn test_mutation_builds_on_fresh_storage() {
        let storage = CartStorage::open_in_memory().unwrap();
        let mut first = CartStore::open(storage.clone());
        let mut second = CartStore::open(storage);

        first.add_one(&item("a", 500));
        second.add_one(&item("b", 300));

        assert_eq!(ids(&second), vec!["a", "b"]);

        // A miss still refreshes the cache from storage.
        assert!(!first.remove_one("zzz"));
        assert_eq!(ids(&first), vec!["a", "b"]);
    }

    #[test]
    fn test_corrupt_slot_rehydrates_empty() {
        let storage = CartStorage::open_in_memory().unwrap();
        storage.set_item(crate::orders::storage::CART_SLOT, b"[{\"id\":").unwrap();

        let cart = CartStore::open(storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stale_entry_keeps_cached_price() {
        let mut cart = empty_cart();
        cart.add_one(&item("seasonal", 980));

        let cached = cart.find("seasonal").unwrap();
        assert_eq!(cached.price, 980);
        assert_eq!(cart.total(), 980);
    }
}
