//! Key bindings
//!
//! Keys map to an [`Action`]; anything that changes order state becomes an
//! [`AppEvent`]. Cursor and focus stay local to the view.

use crossterm::event::KeyCode;
use shared::order::Modal;

use crate::app::{AppEvent, AppState};

/// Panel receiving list navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Menu,
    Cart,
}

/// Cursor positions and focus (view-only state)
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    pub focus: Focus,
    pub menu_cursor: usize,
    pub cart_cursor: usize,
}

impl ViewState {
    /// Keep cursors inside the current list lengths
    pub fn clamp(&mut self, menu_len: usize, cart_len: usize) {
        self.menu_cursor = self.menu_cursor.min(menu_len.saturating_sub(1));
        self.cart_cursor = self.cart_cursor.min(cart_len.saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFocus,
    CursorUp,
    CursorDown,
    Dispatch(AppEvent),
    Ignore,
}

/// Resolve a key press against the current state
pub fn map_key(code: KeyCode, view: &ViewState, state: &AppState) -> Action {
    if state.staging().is_open() {
        return match code {
            KeyCode::Char('+') | KeyCode::Right | KeyCode::Up => {
                Action::Dispatch(AppEvent::IncrementStaged)
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => {
                Action::Dispatch(AppEvent::DecrementStaged)
            }
            KeyCode::Enter => Action::Dispatch(AppEvent::ConfirmStaged),
            KeyCode::Esc => Action::Dispatch(AppEvent::CancelStaged),
            _ => Action::Ignore,
        };
    }

    match state.modal() {
        Modal::Checkout => {
            return match code {
                KeyCode::Enter | KeyCode::Char('y') => Action::Dispatch(AppEvent::ConfirmCheckout),
                KeyCode::Esc | KeyCode::Char('n') => Action::Dispatch(AppEvent::Dismiss),
                _ => Action::Ignore,
            };
        }
        Modal::Error | Modal::ThankYou => {
            return match code {
                KeyCode::Enter | KeyCode::Esc => Action::Dispatch(AppEvent::Dismiss),
                _ => Action::Ignore,
            };
        }
        Modal::None => {}
    }

    match code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Up => Action::CursorUp,
        KeyCode::Down => Action::CursorDown,
        KeyCode::Left => {
            Action::Dispatch(AppEvent::SelectCategory(state.filter().prev(&state.categories())))
        }
        KeyCode::Right => {
            Action::Dispatch(AppEvent::SelectCategory(state.filter().next(&state.categories())))
        }
        KeyCode::Char('c') => Action::Dispatch(AppEvent::RequestCheckout),
        _ => match view.focus {
            Focus::Menu => map_menu_key(code, view, state),
            Focus::Cart => map_cart_key(code, view, state),
        },
    }
}

fn map_menu_key(code: KeyCode, view: &ViewState, state: &AppState) -> Action {
    match code {
        KeyCode::Enter | KeyCode::Char('a') => state
            .visible_items()
            .get(view.menu_cursor)
            .map_or(Action::Ignore, |item| {
                Action::Dispatch(AppEvent::OpenItem(item.id.clone()))
            }),
        _ => Action::Ignore,
    }
}

fn map_cart_key(code: KeyCode, view: &ViewState, state: &AppState) -> Action {
    let lines = state.cart_lines();
    let Some(line) = lines.get(view.cart_cursor) else {
        return Action::Ignore;
    };

    match code {
        KeyCode::Char('+') | KeyCode::Enter => Action::Dispatch(AppEvent::AddOne(line.item.id.clone())),
        KeyCode::Char('-') => Action::Dispatch(AppEvent::RemoveOne(line.item.id.clone())),
        _ => Action::Ignore,
    }
}
