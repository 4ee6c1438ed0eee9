//! OrderFlow - checkout dialog state machine
//!
//! # Transition Table
//!
//! | From | Trigger | To | Side effect |
//! |------|---------|----|-------------|
//! | `None` | `RequestCheckout` (total = 0) | `Error` | - |
//! | `None` | `RequestCheckout` (total > 0) | `Checkout` | - |
//! | `Checkout` | `ConfirmCheckout` | `ThankYou` | cart cleared |
//! | `Checkout` | `Dismiss` | `None` | - (cancel) |
//! | `Error` | `Dismiss` | `None` | - |
//! | `ThankYou` | `Dismiss` | `None` | - |
//!
//! Every other pair is rejected and leaves the state unchanged.

use serde::{Deserialize, Serialize};
use shared::order::Modal;
use thiserror::Error;
use tracing::{debug, info};

use super::cart::CartStore;

/// User action driving the checkout flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTrigger {
    RequestCheckout,
    ConfirmCheckout,
    Dismiss,
}

impl std::fmt::Display for FlowTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowTrigger::RequestCheckout => "request_checkout",
            FlowTrigger::ConfirmCheckout => "confirm_checkout",
            FlowTrigger::Dismiss => "dismiss",
        };
        f.write_str(name)
    }
}

/// Flow errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Invalid transition: {trigger} from {from}")]
    InvalidTransition { from: Modal, trigger: FlowTrigger },
}

/// Result of a table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Modal,
    pub clears_cart: bool,
}

impl Transition {
    fn to(next: Modal) -> Self {
        Self {
            next,
            clears_cart: false,
        }
    }
}

/// Checkout flow holding the visible dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFlow {
    modal: Modal,
}

impl OrderFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// Look up the transition for `trigger` in state `from`
    pub fn transition(
        from: Modal,
        trigger: FlowTrigger,
        cart_total: u64,
    ) -> Result<Transition, FlowError> {
        match (from, trigger) {
            (Modal::None, FlowTrigger::RequestCheckout) if cart_total == 0 => {
                Ok(Transition::to(Modal::Error))
            }
            (Modal::None, FlowTrigger::RequestCheckout) => Ok(Transition::to(Modal::Checkout)),
            (Modal::Checkout, FlowTrigger::ConfirmCheckout) => Ok(Transition {
                next: Modal::ThankYou,
                clears_cart: true,
            }),
            (Modal::Error | Modal::Checkout | Modal::ThankYou, FlowTrigger::Dismiss) => {
                Ok(Transition::to(Modal::None))
            }
            (from, trigger) => Err(FlowError::InvalidTransition { from, trigger }),
        }
    }

    /// Apply `trigger`, clearing the cart when the transition requires it
    pub fn apply(&mut self, trigger: FlowTrigger, cart: &mut CartStore) -> Result<Modal, FlowError> {
        let from = self.modal;
        let transition = Self::transition(from, trigger, cart.total())?;

        if transition.clears_cart {
            let total = cart.total();
            cart.clear();
            info!(total, "Checkout confirmed, cart cleared");
        }

        self.modal = transition.next;
        debug!(%from, %trigger, to = %self.modal, "Order flow transition");
        Ok(self.modal)
    }

    pub fn request_checkout(&mut self, cart: &mut CartStore) -> Result<Modal, FlowError> {
        self.apply(FlowTrigger::RequestCheckout, cart)
    }

    pub fn confirm_checkout(&mut self, cart: &mut CartStore) -> Result<Modal, FlowError> {
        self.apply(FlowTrigger::ConfirmCheckout, cart)
    }

    pub fn dismiss(&mut self, cart: &mut CartStore) -> Result<Modal, FlowError> {
        self.apply(FlowTrigger::Dismiss, cart)
    }
}
