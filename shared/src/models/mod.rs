//! Data models
//!
//! Catalog types as delivered by the menu CMS.

pub mod menu;

// Re-exports
pub use menu::*;
