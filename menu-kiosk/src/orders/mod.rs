//! Order Module
//!
//! - **storage**: redb-backed local storage with the `cart` slot
//! - **cart**: `CartStore`, the persisted cart sequence and its derived views
//! - **staging**: `SelectionStaging`, the item being configured
//! - **flow**: `OrderFlow`, the checkout dialog state machine
//!
//! # Data Flow
//!
//! ```text
//! SelectionStaging ──confirm──▶ CartStore ──▶ CartStorage (redb)
//!                                   ▲
//!                 OrderFlow ──clear─┘ (checkout confirmed)
//! ```

pub mod cart;
pub mod flow;
pub mod staging;
pub mod storage;

// Re-exports
pub use cart::CartStore;
pub use flow::{FlowError, FlowTrigger, OrderFlow, Transition};
pub use staging::SelectionStaging;
pub use storage::{CART_SLOT, CartStorage, StorageError, StorageResult};
