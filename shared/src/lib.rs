//! Shared types for the menu kiosk
//!
//! Catalog models and order types used by both the catalog client and the
//! kiosk application.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use models::{MenuImage, MenuItem, MenuListResponse, UNCATEGORIZED_LABEL};
pub use order::{CartLine, Modal};
pub use serde::{Deserialize, Serialize};
