//! Game inventory domain module.
//!
//! Items with a lifecycle state machine, per-kind use behaviors, combine and
//! upgrade rules, and the builder/factory that construct items. Pure
//! in-memory domain logic: no IO, no console, no storage.

pub mod attributes;
pub mod behavior;
pub mod builder;
pub mod combine;
pub mod events;
pub mod factory;
pub mod inventory;
pub mod item;
pub mod kind;
pub mod state;

pub use attributes::Attributes;
pub use behavior::{UseBehavior, UseOutcome};
pub use builder::ItemBuilder;
pub use events::{
    InventoryEvent, ItemAdded, ItemConsumed, ItemEquipped, ItemRemoved, ItemUnequipped,
    ItemUpgraded, ItemsCombined,
};
pub use factory::{ItemFactory, MedievalItemFactory};
pub use inventory::PlayerInventory;
pub use item::Item;
pub use kind::ItemKind;
pub use state::{ItemState, Transition};
