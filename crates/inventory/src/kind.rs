use core::str::FromStr;
use serde::{Deserialize, Serialize};

use gearbag_core::DomainError;

use crate::behavior::UseBehavior;

/// Closed set of item categories. Fixed for the lifetime of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    QuestItem,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Weapon,
        ItemKind::Armor,
        ItemKind::Potion,
        ItemKind::QuestItem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Potion => "Potion",
            ItemKind::QuestItem => "QuestItem",
        }
    }

    /// The use strategy bound to every item of this kind.
    pub fn use_behavior(self) -> UseBehavior {
        match self {
            ItemKind::Weapon | ItemKind::Armor => UseBehavior::Equip,
            ItemKind::Potion => UseBehavior::Consume,
            ItemKind::QuestItem => UseBehavior::Inert,
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    /// Accepts the display names case-insensitively, ignoring `_`, `-` and spaces
    /// (so `quest_item` and `Quest Item` both parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == normalized)
            .ok_or_else(|| DomainError::unsupported(format!("unknown item kind: {s:?}")))
    }
}
