//! Player inventory aggregate.
//!
//! Owns the held items and tracks which of them are equipped. Every
//! operation either completes fully or leaves both collections untouched.

use chrono::Utc;
use tracing::debug;

use gearbag_core::{AggregateRoot, DomainError, DomainResult, InventoryId, ItemId};
use gearbag_events::PendingEvents;

use crate::behavior::UseOutcome;
use crate::combine;
use crate::events::{
    InventoryEvent, ItemAdded, ItemConsumed, ItemEquipped, ItemRemoved, ItemUnequipped,
    ItemUpgraded, ItemsCombined,
};
use crate::item::Item;
use crate::kind::ItemKind;
use crate::state::{ItemState, Transition};

pub const NOT_IN_INVENTORY: &str = "item not in inventory";

/// Aggregate root: PlayerInventory.
///
/// - `items`: held items in insertion order, unique by identity
/// - `equipped`: identities of held items in the `Equipped` state, in equip order
#[derive(Debug)]
pub struct PlayerInventory {
    id: InventoryId,
    items: Vec<Item>,
    equipped: Vec<ItemId>,
    pending: PendingEvents<InventoryEvent>,
    version: u64,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self::with_id(InventoryId::new())
    }

    pub fn with_id(id: InventoryId) -> Self {
        Self {
            id,
            items: Vec::new(),
            equipped: Vec::new(),
            pending: PendingEvents::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> InventoryId {
        self.id
    }

    /// Held items, oldest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Equipped items, in the order they were equipped.
    pub fn equipped(&self) -> impl Iterator<Item = &Item> + '_ {
        self.equipped.iter().filter_map(|id| self.get(*id))
    }

    pub fn equipped_ids(&self) -> &[ItemId] {
        &self.equipped
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id_typed() == item_id)
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.position(item_id).is_some()
    }

    pub fn is_equipped(&self, item_id: ItemId) -> bool {
        self.equipped.contains(&item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take ownership of `item` in the `InInventory` state.
    ///
    /// Re-adding an identity that is already held is a `Conflict`.
    pub fn add(&mut self, mut item: Item) -> DomainResult<ItemId> {
        let item_id = item.id_typed();
        if self.contains(item_id) {
            return Err(DomainError::conflict("item already in inventory"));
        }

        item.set_state(ItemState::InInventory);
        debug!(item_id = %item_id, name = item.name(), kind = %item.kind(), "item added");

        self.record(InventoryEvent::ItemAdded(ItemAdded {
            inventory_id: self.id,
            item_id,
            name: item.name().to_string(),
            kind: item.kind(),
            occurred_at: Utc::now(),
        }));
        self.items.push(item);
        Ok(item_id)
    }

    /// Drop `item_id` from both collections and hand it back.
    ///
    /// Not state-checked: an equipped item is removed as-is. Returns `None`
    /// (and changes nothing) when the item is not held.
    pub fn remove(&mut self, item_id: ItemId) -> Option<Item> {
        let item = self.detach(item_id)?;
        debug!(item_id = %item_id, name = item.name(), "item removed");

        self.record(InventoryEvent::ItemRemoved(ItemRemoved {
            inventory_id: self.id,
            item_id,
            occurred_at: Utc::now(),
        }));
        Some(item)
    }

    /// Run the item's use behavior.
    pub fn use_item(&mut self, item_id: ItemId) -> UseOutcome {
        let behavior = match self.get(item_id) {
            Some(item) => item.use_behavior(),
            None => return UseOutcome::fail(NOT_IN_INVENTORY),
        };
        behavior.apply(self, item_id)
    }

    /// Return an equipped item to the bag.
    pub fn unequip(&mut self, item_id: ItemId) -> DomainResult<()> {
        self.transition(item_id, Transition::Unequip)
    }

    /// First held item named exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Held items of `kind`, in held order. The iterator is lazy and can be
    /// cloned to restart from the same position.
    pub fn find_by_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Item> + Clone + '_ {
        self.items.iter().filter(move |item| item.kind() == kind)
    }

    /// Retire `base_id` and `material_id` and add the item they combine into.
    pub fn combine(&mut self, base_id: ItemId, material_id: ItemId) -> DomainResult<&Item> {
        if base_id == material_id {
            return Err(DomainError::validation("cannot combine an item with itself"));
        }

        let (Some(base), Some(material)) = (self.get(base_id), self.get(material_id)) else {
            return Err(DomainError::not_found("both items must be in inventory"));
        };
        let mut result = combine::combine(base, material)?;

        self.detach(base_id);
        self.detach(material_id);

        result.set_state(ItemState::InInventory);
        let result_id = result.id_typed();
        debug!(
            base_id = %base_id,
            material_id = %material_id,
            result_id = %result_id,
            name = result.name(),
            "items combined"
        );

        self.record(InventoryEvent::ItemsCombined(ItemsCombined {
            inventory_id: self.id,
            base_id,
            material_id,
            result_id,
            occurred_at: Utc::now(),
        }));
        Ok(self.push(result))
    }

    /// Replace `item_id` with a copy whose `attribute` is raised by
    /// `increment` (starting from zero when the attribute is missing).
    ///
    /// Returns the held copy and the detached original. The original keeps
    /// its attributes and state exactly as they were.
    pub fn upgrade(
        &mut self,
        item_id: ItemId,
        attribute: &str,
        increment: f64,
    ) -> DomainResult<(&Item, Item)> {
        let index = self
            .position(item_id)
            .ok_or_else(|| DomainError::not_found(NOT_IN_INVENTORY))?;

        if attribute.trim().is_empty() {
            return Err(DomainError::validation("attribute name cannot be empty"));
        }
        if !increment.is_finite() {
            return Err(DomainError::validation("increment must be a finite number"));
        }

        let mut upgraded = self.items[index].replicate();
        upgraded.attributes_mut().add(attribute, increment);

        self.equipped.retain(|id| *id != item_id);
        let original = self.items.remove(index);

        let upgraded_id = upgraded.id_typed();
        debug!(
            original_id = %item_id,
            upgraded_id = %upgraded_id,
            attribute,
            increment,
            "item upgraded"
        );

        self.record(InventoryEvent::ItemUpgraded(ItemUpgraded {
            inventory_id: self.id,
            original_id: item_id,
            upgraded_id,
            attribute: attribute.to_string(),
            increment,
            occurred_at: Utc::now(),
        }));
        Ok((self.push(upgraded), original))
    }

    /// Multi-line summary: held items with state and attributes, then the
    /// equipped items.
    pub fn describe(&self) -> String {
        let mut lines = vec!["Inventory:".to_string()];
        for item in &self.items {
            lines.push(format!(
                " - {} ({}) [{}] | {}",
                item.name(),
                item.kind(),
                item.state(),
                item.attributes()
            ));
        }

        lines.push("Equipped:".to_string());
        for item in self.equipped() {
            lines.push(format!(" - {} ({})", item.name(), item.kind()));
        }

        lines.join("\n")
    }

    /// Events recorded since the last drain, oldest first.
    pub fn pending_events(&self) -> &[InventoryEvent] {
        self.pending.peek()
    }

    pub fn take_events(&mut self) -> Vec<InventoryEvent> {
        self.pending.take()
    }

    /// Apply a lifecycle transition to a held item and update the
    /// collections to match the new state.
    pub(crate) fn transition(&mut self, item_id: ItemId, transition: Transition) -> DomainResult<()> {
        let index = self
            .position(item_id)
            .ok_or_else(|| DomainError::not_found(NOT_IN_INVENTORY))?;
        let next = self.items[index].state().next(transition)?;
        let inventory_id = self.id;
        let occurred_at = Utc::now();

        let event = match transition {
            Transition::Equip => {
                self.items[index].set_state(next);
                self.equipped.push(item_id);
                InventoryEvent::ItemEquipped(ItemEquipped {
                    inventory_id,
                    item_id,
                    occurred_at,
                })
            }
            Transition::Unequip => {
                self.items[index].set_state(next);
                self.equipped.retain(|id| *id != item_id);
                InventoryEvent::ItemUnequipped(ItemUnequipped {
                    inventory_id,
                    item_id,
                    occurred_at,
                })
            }
            Transition::Consume => {
                // Consumed items leave the aggregate for good.
                let mut consumed = self.items.remove(index);
                consumed.set_state(next);
                self.equipped.retain(|id| *id != item_id);
                InventoryEvent::ItemConsumed(ItemConsumed {
                    inventory_id,
                    item_id,
                    occurred_at,
                })
            }
        };

        debug!(item_id = %item_id, state = %next, "item state changed");
        self.record(event);
        Ok(())
    }

    fn position(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == item_id)
    }

    fn detach(&mut self, item_id: ItemId) -> Option<Item> {
        let index = self.position(item_id)?;
        self.equipped.retain(|id| *id != item_id);
        Some(self.items.remove(index))
    }

    fn push(&mut self, item: Item) -> &Item {
        let index = self.items.len();
        self.items.push(item);
        &self.items[index]
    }

    fn record(&mut self, event: InventoryEvent) {
        self.pending.record(event);
        // One version step per successful operation.
        self.version += 1;
    }
}

impl AggregateRoot for PlayerInventory {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl core::fmt::Display for PlayerInventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
