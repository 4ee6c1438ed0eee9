//! Order Module
//!
//! Types for the customer's cart and the checkout dialogs:
//! - `CartLine`: grouped cart row (item + derived quantity)
//! - `Modal`: which checkout dialog is visible

pub mod types;

// Re-exports
pub use types::*;
