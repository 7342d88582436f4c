use serde::{Deserialize, Serialize};

use gearbag_core::{Entity, ItemId};

use crate::attributes::{Attributes, DAMAGE, DEFENSE, HEAL, WEIGHT};
use crate::behavior::UseBehavior;
use crate::kind::ItemKind;
use crate::state::ItemState;

/// A game item: identity, kind, attributes and lifecycle state.
///
/// `Item` is not `Clone`: a copy would share an identity.
/// [`Item::replicate`] makes a look-alike with a fresh identity instead.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    kind: ItemKind,
    attributes: Attributes,
    state: ItemState,
}

impl Item {
    /// Kind-agnostic constructor; also used by the builder.
    pub(crate) fn assemble(
        kind: ItemKind,
        name: impl Into<String>,
        description: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
            kind,
            attributes,
            state: ItemState::InInventory,
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        description: impl Into<String>,
        damage: f64,
        weight: f64,
    ) -> Self {
        let attributes = [(DAMAGE, damage), (WEIGHT, weight)].into_iter().collect();
        Self::assemble(ItemKind::Weapon, name, description, attributes)
    }

    pub fn armor(
        name: impl Into<String>,
        description: impl Into<String>,
        defense: f64,
        weight: f64,
    ) -> Self {
        let attributes = [(DEFENSE, defense), (WEIGHT, weight)].into_iter().collect();
        Self::assemble(ItemKind::Armor, name, description, attributes)
    }

    pub fn potion(name: impl Into<String>, description: impl Into<String>, heal: f64) -> Self {
        let attributes = [(HEAL, heal)].into_iter().collect();
        Self::assemble(ItemKind::Potion, name, description, attributes)
    }

    pub fn quest_item(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::assemble(ItemKind::QuestItem, name, description, Attributes::new())
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Read-only view of the attribute map.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<f64> {
        self.attributes.get(key)
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn use_behavior(&self) -> UseBehavior {
        self.kind.use_behavior()
    }

    /// Same kind, name, description and attributes under a fresh identity,
    /// in the `InInventory` state. The attribute map is independent of ours.
    pub fn replicate(&self) -> Item {
        Self::assemble(
            self.kind,
            self.name.clone(),
            self.description.clone(),
            self.attributes.clone(),
        )
    }

    pub(crate) fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
