use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gearbag_core::{InventoryId, ItemId};
use gearbag_events::Event;

use crate::kind::ItemKind;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub inventory_id: InventoryId,
    pub item_id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub inventory_id: InventoryId,
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemEquipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEquipped {
    pub inventory_id: InventoryId,
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemUnequipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUnequipped {
    pub inventory_id: InventoryId,
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemConsumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConsumed {
    pub inventory_id: InventoryId,
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemsCombined. Both inputs were retired and `result_id` added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsCombined {
    pub inventory_id: InventoryId,
    pub base_id: ItemId,
    pub material_id: ItemId,
    pub result_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemUpgraded. `original_id` was retired and `upgraded_id` added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUpgraded {
    pub inventory_id: InventoryId,
    pub original_id: ItemId,
    pub upgraded_id: ItemId,
    pub attribute: String,
    pub increment: f64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    ItemEquipped(ItemEquipped),
    ItemUnequipped(ItemUnequipped),
    ItemConsumed(ItemConsumed),
    ItemsCombined(ItemsCombined),
    ItemUpgraded(ItemUpgraded),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemRemoved(_) => "inventory.item.removed",
            InventoryEvent::ItemEquipped(_) => "inventory.item.equipped",
            InventoryEvent::ItemUnequipped(_) => "inventory.item.unequipped",
            InventoryEvent::ItemConsumed(_) => "inventory.item.consumed",
            InventoryEvent::ItemsCombined(_) => "inventory.items.combined",
            InventoryEvent::ItemUpgraded(_) => "inventory.item.upgraded",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::ItemRemoved(e) => e.occurred_at,
            InventoryEvent::ItemEquipped(e) => e.occurred_at,
            InventoryEvent::ItemUnequipped(e) => e.occurred_at,
            InventoryEvent::ItemConsumed(e) => e.occurred_at,
            InventoryEvent::ItemsCombined(e) => e.occurred_at,
            InventoryEvent::ItemUpgraded(e) => e.occurred_at,
        }
    }
}
