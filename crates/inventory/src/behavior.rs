//! What happens when a player uses an item.

use serde::{Deserialize, Serialize};

use gearbag_core::{ItemId, ValueObject};

use crate::inventory::PlayerInventory;
use crate::state::Transition;

pub const CANNOT_BE_USED: &str = "This item cannot be used.";

/// Outcome of a use attempt. Failures here are expected and carry a reason;
/// they never abort the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseOutcome {
    pub success: bool,
    pub message: String,
}

impl ValueObject for UseOutcome {}

impl UseOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Per-kind use strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseBehavior {
    /// Weapons and armor: run the equip transition.
    Equip,
    /// Potions: run the consume transition.
    Consume,
    /// Quest items: refuse, change nothing.
    Inert,
}

impl UseBehavior {
    /// Apply this behavior to the held item `item_id`.
    ///
    /// Any transition failure becomes a failed outcome carrying the state
    /// machine's reason.
    pub fn apply(self, inventory: &mut PlayerInventory, item_id: ItemId) -> UseOutcome {
        let (transition, verb) = match self {
            UseBehavior::Equip => (Transition::Equip, "Equipped"),
            UseBehavior::Consume => (Transition::Consume, "Consumed"),
            UseBehavior::Inert => return UseOutcome::fail(CANNOT_BE_USED),
        };

        let name = match inventory.get(item_id) {
            Some(item) => item.name().to_string(),
            None => return UseOutcome::fail(crate::inventory::NOT_IN_INVENTORY),
        };

        match inventory.transition(item_id, transition) {
            Ok(()) => UseOutcome::ok(format!("{verb} {name}")),
            Err(err) => UseOutcome::fail(err.reason()),
        }
    }
}
