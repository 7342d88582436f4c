//! Item lifecycle state machine.
//!
//! ```text
//! InInventory --equip--> Equipped --unequip--> InInventory
//! InInventory --consume--> Consumed (terminal)
//! ```
//!
//! The rules here are pure: they only decide the next state. The inventory
//! applies the decision to its collections.

use serde::{Deserialize, Serialize};

use gearbag_core::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemState {
    #[default]
    InInventory,
    Equipped,
    Consumed,
}

/// A requested lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Equip,
    Unequip,
    Consume,
}

impl ItemState {
    pub fn name(self) -> &'static str {
        match self {
            ItemState::InInventory => "InInventory",
            ItemState::Equipped => "Equipped",
            ItemState::Consumed => "Consumed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ItemState::Consumed)
    }

    /// Decide the state reached by `transition`, or why it is not allowed.
    pub fn next(self, transition: Transition) -> DomainResult<ItemState> {
        use ItemState::*;
        use Transition::*;

        match (self, transition) {
            (InInventory, Equip) => Ok(Equipped),
            (InInventory, Unequip) => Err(DomainError::invariant("item is not equipped")),
            (InInventory, Consume) => Ok(Consumed),

            (Equipped, Equip) => Err(DomainError::invariant("item already equipped")),
            (Equipped, Unequip) => Ok(InInventory),
            (Equipped, Consume) => Err(DomainError::invariant("cannot consume equipped item")),

            (Consumed, Equip) => Err(DomainError::invariant("item already consumed")),
            (Consumed, Unequip) => Err(DomainError::invariant("cannot unequip consumed item")),
            (Consumed, Consume) => Err(DomainError::invariant("item already consumed")),
        }
    }
}

impl core::fmt::Display for ItemState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
