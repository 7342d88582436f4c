//! Themed starter item sets.

use gearbag_core::{DomainError, DomainResult};

use crate::item::Item;

/// Produces one basic item of each kind for a theme.
pub trait ItemFactory {
    fn basic_weapon(&self) -> Item;

    fn basic_armor(&self) -> Item;

    fn healing_potion(&self) -> Item;

    /// Fails when `name` is blank.
    fn quest_item(&self, name: &str) -> DomainResult<Item>;
}

/// Iron-and-leather starter kit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedievalItemFactory;

impl ItemFactory for MedievalItemFactory {
    fn basic_weapon(&self) -> Item {
        Item::weapon("Iron Sword", "Basic iron sword.", 10.0, 5.0)
    }

    fn basic_armor(&self) -> Item {
        Item::armor("Leather Armor", "Light armor.", 5.0, 8.0)
    }

    fn healing_potion(&self) -> Item {
        Item::potion("Minor Healing", "Restores a bit of HP.", 25.0)
    }

    fn quest_item(&self, name: &str) -> DomainResult<Item> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("quest item name cannot be empty"));
        }
        Ok(Item::quest_item(name, "Quest item."))
    }
}
