//! Application layer
//!
//! All client state lives in one [`AppState`]; every change goes through
//! [`AppState::update`] with an [`AppEvent`].

pub mod event;
pub mod state;

pub use event::AppEvent;
pub use state::{AppError, AppResult, AppState};
