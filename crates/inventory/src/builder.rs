//! Step-by-step item construction with per-kind defaults.

use gearbag_core::DomainResult;

use crate::attributes::{Attributes, DAMAGE, DEFENSE, HEAL, WEIGHT};
use crate::item::Item;
use crate::kind::ItemKind;

pub const DEFAULT_NAME: &str = "Unnamed";

/// Accumulates name, description and attribute overrides for one kind.
///
/// ```ignore
/// let axe = ItemBuilder::new(ItemKind::Weapon)
///     .name("Axe")
///     .attribute(DAMAGE, 7.0)
///     .build();
/// assert_eq!(axe.attribute(WEIGHT), Some(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    kind: ItemKind,
    name: String,
    description: String,
    overrides: Attributes,
}

impl ItemBuilder {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            name: DEFAULT_NAME.to_string(),
            description: String::new(),
            overrides: Attributes::new(),
        }
    }

    /// Start a builder from a kind name such as `"Weapon"` or `"quest_item"`.
    ///
    /// Fails with `Unsupported("unknown item kind: ..")` for anything else.
    pub fn for_kind_name(kind: &str) -> DomainResult<Self> {
        Ok(Self::new(kind.parse()?))
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Override one attribute. Only keys the kind carries by default are
    /// used at build time; anything else is ignored.
    pub fn attribute(mut self, key: impl Into<String>, value: f64) -> Self {
        self.overrides.set(key, value);
        self
    }

    pub fn build(self) -> Item {
        let mut attributes = defaults_for(self.kind);
        for (key, value) in self.overrides.iter() {
            if attributes.contains(key) {
                attributes.set(key, value);
            }
        }
        Item::assemble(self.kind, self.name, self.description, attributes)
    }
}

/// Baseline attributes every freshly built item of `kind` carries.
pub fn defaults_for(kind: ItemKind) -> Attributes {
    match kind {
        ItemKind::Weapon => [(DAMAGE, 1.0), (WEIGHT, 1.0)].into_iter().collect(),
        ItemKind::Armor => [(DEFENSE, 1.0), (WEIGHT, 1.0)].into_iter().collect(),
        ItemKind::Potion => [(HEAL, 10.0)].into_iter().collect(),
        ItemKind::QuestItem => Attributes::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearbag_core::DomainError;

    #[test]
    fn weapon_without_overrides_gets_unit_defaults() {
        let weapon = ItemBuilder::new(ItemKind::Weapon).build();
        assert_eq!(weapon.attribute(DAMAGE), Some(1.0));
        assert_eq!(weapon.attribute(WEIGHT), Some(1.0));
        assert_eq!(weapon.attributes().len(), 2);
        assert_eq!(weapon.name(), DEFAULT_NAME);
        assert_eq!(weapon.description(), "");
    }

    #[test]
    fn overrides_replace_only_what_was_set() {
        let armor = ItemBuilder::new(ItemKind::Armor)
            .name("Chainmail")
            .description("Rings of steel")
            .attribute(DEFENSE, 12.0)
            .build();
        assert_eq!(armor.name(), "Chainmail");
        assert_eq!(armor.description(), "Rings of steel");
        assert_eq!(armor.attribute(DEFENSE), Some(12.0));
        assert_eq!(armor.attribute(WEIGHT), Some(1.0));
    }

    #[test]
    fn potion_and_quest_item_defaults() {
        let potion = ItemBuilder::new(ItemKind::Potion).build();
        assert_eq!(potion.attribute(HEAL), Some(10.0));

        let quest = ItemBuilder::new(ItemKind::QuestItem).name("Map").build();
        assert!(quest.attributes().is_empty());
    }

    #[test]
    fn keys_outside_the_kind_are_dropped() {
        let weapon = ItemBuilder::new(ItemKind::Weapon).attribute("Sharpness", 3.0).build();
        assert_eq!(weapon.attribute("Sharpness"), None);
        assert_eq!(weapon.attribute(DAMAGE), Some(1.0));

        let potion = ItemBuilder::new(ItemKind::Potion)
            .attribute(DAMAGE, 5.0)
            .attribute(HEAL, 40.0)
            .build();
        assert_eq!(potion.attribute(DAMAGE), None);
        assert_eq!(potion.attribute(HEAL), Some(40.0));
        assert_eq!(potion.attributes().len(), 1);

        let quest = ItemBuilder::new(ItemKind::QuestItem)
            .attribute(DAMAGE, 99.0)
            .attribute(WEIGHT, 2.0)
            .build();
        assert!(quest.attributes().is_empty());
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let err = ItemBuilder::for_kind_name("Trinket").unwrap_err();
        match err {
            DomainError::Unsupported(msg) if msg.contains("unknown item kind") => {}
            other => panic!("Expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn kind_name_selects_kind() {
        let builder = ItemBuilder::for_kind_name("armor").unwrap();
        assert_eq!(builder.kind(), ItemKind::Armor);
    }
}
