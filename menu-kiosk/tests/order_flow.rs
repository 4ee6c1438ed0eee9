//! End-to-end ordering scenarios through `AppState::update`

use menu_kiosk::catalog::{CatalogOutcome, CategoryFilter};
use menu_kiosk::orders::{CartStorage, CartStore};
use menu_kiosk::{AppError, AppEvent, AppState};
use shared::models::MenuItem;
use shared::order::Modal;

fn catalog() -> Vec<MenuItem> {
    vec![
        MenuItem::new("a", "唐揚げ定食", 500).with_category("定食"),
        MenuItem::new("b", "ビール", 600).with_category("ドリンク"),
        MenuItem::new("c", "本日のおすすめ", 700),
    ]
}

fn loaded_state(storage: CartStorage) -> AppState {
    let mut state = AppState::new(CartStore::open(storage));
    state
        .update(AppEvent::CatalogLoaded(CatalogOutcome::Loaded(catalog())))
        .unwrap();
    state
}

#[test]
fn test_staged_quantity_merges_into_existing_line() {
    let storage = CartStorage::open_in_memory().unwrap();
    let mut state = loaded_state(storage.clone());

    state.update(AppEvent::AddOne("a".into())).unwrap();
    assert_eq!(state.total(), 500);

    state.update(AppEvent::OpenItem("a".into())).unwrap();
    state.update(AppEvent::IncrementStaged).unwrap();
    assert_eq!(state.staging().quantity(), 2);
    state.update(AppEvent::ConfirmStaged).unwrap();

    assert!(!state.staging().is_open());
    let lines = state.cart_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(state.total(), 1500);
    assert_eq!(storage.load_cart().unwrap().unwrap().len(), 3);
}

#[test]
fn test_empty_checkout_shows_error_then_dismisses() {
    let mut state = loaded_state(CartStorage::open_in_memory().unwrap());

    state.update(AppEvent::RequestCheckout).unwrap();
    assert_eq!(state.modal(), Modal::Error);

    state.update(AppEvent::Dismiss).unwrap();
    assert_eq!(state.modal(), Modal::None);
    assert!(state.cart().is_empty());
}

#[test]
fn test_confirmed_checkout_clears_storage() {
    let storage = CartStorage::open_in_memory().unwrap();
    let mut state = loaded_state(storage.clone());

    state.update(AppEvent::AddOne("a".into())).unwrap();
    state.update(AppEvent::AddOne("b".into())).unwrap();
    assert_eq!(state.total(), 1100);

    state.update(AppEvent::RequestCheckout).unwrap();
    assert_eq!(state.modal(), Modal::Checkout);

    state.update(AppEvent::ConfirmCheckout).unwrap();
    assert_eq!(state.modal(), Modal::ThankYou);
    assert!(state.cart().is_empty());
    assert_eq!(state.total(), 0);
    assert!(storage.load_cart().unwrap().is_none());

    state.update(AppEvent::Dismiss).unwrap();
    assert_eq!(state.modal(), Modal::None);
}

#[test]
fn test_cancelled_checkout_keeps_cart() {
    let mut state = loaded_state(CartStorage::open_in_memory().unwrap());

    state.update(AppEvent::AddOne("b".into())).unwrap();
    state.update(AppEvent::RequestCheckout).unwrap();
    state.update(AppEvent::Dismiss).unwrap();

    assert_eq!(state.modal(), Modal::None);
    assert_eq!(state.total(), 600);
}

#[test]
fn test_confirm_without_dialog_is_rejected() {
    let mut state = loaded_state(CartStorage::open_in_memory().unwrap());
    state.update(AppEvent::AddOne("a".into())).unwrap();

    let err = state.update(AppEvent::ConfirmCheckout).unwrap_err();
    assert!(matches!(err, AppError::Flow(_)));
    assert_eq!(state.modal(), Modal::None);
    assert_eq!(state.total(), 500);
}

#[test]
fn test_category_filter_with_no_matches_shows_nothing() {
    let mut state = loaded_state(CartStorage::open_in_memory().unwrap());

    state
        .update(AppEvent::SelectCategory(CategoryFilter::only("デザート")))
        .unwrap();
    assert!(state.visible_items().is_empty());

    state
        .update(AppEvent::SelectCategory(CategoryFilter::All))
        .unwrap();
    assert_eq!(state.visible_items().len(), 3);
}

#[test]
fn test_uncategorized_items_use_sentinel_category() {
    let mut state = loaded_state(CartStorage::open_in_memory().unwrap());

    assert_eq!(
        state.categories(),
        vec!["定食".to_string(), "ドリンク".to_string(), shared::UNCATEGORIZED_LABEL.to_string()]
    );

    state
        .update(AppEvent::SelectCategory(CategoryFilter::only(
            shared::UNCATEGORIZED_LABEL,
        )))
        .unwrap();
    let visible = state.visible_items();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "c");
}

#[test]
fn test_failed_catalog_keeps_persisted_cart_usable() {
    let storage = CartStorage::open_in_memory().unwrap();
    {
        let mut cart = CartStore::open(storage.clone());
        cart.add_one(&MenuItem::new("old", "旧メニュー", 300));
    }

    let mut state = AppState::new(CartStore::open(storage));
    state
        .update(AppEvent::CatalogLoaded(CatalogOutcome::Failed("timeout".into())))
        .unwrap();

    assert!(state.visible_items().is_empty());
    assert_eq!(state.catalog_error(), Some("timeout"));

    // Stale lines still adjust from the cart's cached copy
    state.update(AppEvent::AddOne("old".into())).unwrap();
    assert_eq!(state.total(), 600);
    state.update(AppEvent::RemoveOne("old".into())).unwrap();
    assert_eq!(state.total(), 300);
}
