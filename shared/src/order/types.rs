//! Order types shared by the cart and the checkout flow

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// One row of the grouped cart view
///
/// Derived from the raw cart sequence, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal (`price * quantity`)
    pub fn subtotal(&self) -> u64 {
        self.item.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Dialog currently shown by the checkout flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    /// No dialog (initial and resting state)
    #[default]
    None,
    /// Checkout requested with an empty cart
    Error,
    /// Waiting for the customer to confirm the total
    Checkout,
    /// Order accepted, cart already cleared
    ThankYou,
}

impl Modal {
    pub fn is_open(self) -> bool {
        self != Modal::None
    }
}

impl std::fmt::Display for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Modal::None => "none",
            Modal::Error => "error",
            Modal::Checkout => "checkout",
            Modal::ThankYou => "thankyou",
        };
        f.write_str(name)
    }
}
