//! Black-box scenarios over the public inventory API.

use gearbag_core::{AggregateRoot, DomainError};
use gearbag_events::Event;
use gearbag_inventory::attributes::{DAMAGE, DEFENSE, WEIGHT};
use gearbag_inventory::{
    InventoryEvent, ItemBuilder, ItemFactory, ItemKind, ItemState, MedievalItemFactory,
    PlayerInventory,
};

#[test]
fn starter_kit_scenario() {
    let factory = MedievalItemFactory;
    let mut inventory = PlayerInventory::new();

    let sword = inventory.add(factory.basic_weapon()).unwrap();
    let armor = inventory.add(factory.basic_armor()).unwrap();
    let potion = inventory.add(factory.healing_potion()).unwrap();
    let amulet = inventory
        .add(factory.quest_item("Amulet of Dawn").unwrap())
        .unwrap();

    assert_eq!(inventory.use_item(sword).message, "Equipped Iron Sword");
    assert_eq!(inventory.use_item(armor).message, "Equipped Leather Armor");
    assert_eq!(inventory.use_item(potion).message, "Consumed Minor Healing");
    assert!(!inventory.use_item(amulet).success);

    let potion2 = inventory.add(factory.healing_potion()).unwrap();
    let enhanced = inventory.combine(sword, potion2).unwrap();
    assert_eq!(enhanced.name(), "Iron Sword+Enhanced");
    assert_eq!(enhanced.attribute(DAMAGE), Some(12.5));

    let names: Vec<&str> = inventory.items().iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["Leather Armor", "Amulet of Dawn", "Iron Sword+Enhanced"]);
    let equipped: Vec<&str> = inventory.equipped().map(|i| i.name()).collect();
    assert_eq!(equipped, vec!["Leather Armor"]);

    let description = inventory.describe();
    assert!(description.starts_with("Inventory:\n"));
    assert!(description.contains(" - Leather Armor (Armor) [Equipped] | Defense:5, Weight:8"));
    assert!(description.ends_with("Equipped:\n - Leather Armor (Armor)"));
}

#[test]
fn built_items_join_and_leave_inventory() {
    let mut inventory = PlayerInventory::new();
    let shield = ItemBuilder::for_kind_name("armor")
        .unwrap()
        .name("Buckler")
        .attribute(DEFENSE, 4.0)
        .build();
    let shield = inventory.add(shield).unwrap();

    let item = inventory.get(shield).unwrap();
    assert_eq!(item.kind(), ItemKind::Armor);
    assert_eq!(item.attribute(WEIGHT), Some(1.0));
    assert_eq!(item.state(), ItemState::InInventory);

    let upgraded = inventory.upgrade(shield, DEFENSE, 2.0).unwrap().0.id_typed();
    let a = inventory.add(ItemBuilder::new(ItemKind::Armor).name("Greaves").build()).unwrap();
    let combined = inventory.combine(upgraded, a).unwrap();
    assert_eq!(combined.name(), "Buckler+Greaves");
    assert!((combined.attribute(DEFENSE).unwrap() - (6.0 + 1.0) * 1.1).abs() < 1e-9);
    assert_eq!(inventory.len(), 1);
}

#[test]
fn errors_identify_the_violated_precondition() {
    let mut inventory = PlayerInventory::new();
    let map = inventory
        .add(MedievalItemFactory.quest_item("Map").unwrap())
        .unwrap();
    let relic = inventory
        .add(MedievalItemFactory.quest_item("Relic").unwrap())
        .unwrap();

    let err = inventory.combine(map, relic).unwrap_err();
    assert_eq!(err, DomainError::unsupported("unsupported combination: QuestItem + QuestItem"));

    let err = inventory.unequip(map).unwrap_err();
    assert_eq!(err.reason(), "item is not equipped");
}

#[test]
fn drained_events_describe_the_session() {
    let mut inventory = PlayerInventory::new();
    let sword = inventory.add(MedievalItemFactory.basic_weapon()).unwrap();
    let (upgraded, original) = inventory.upgrade(sword, DAMAGE, 1.0).unwrap();
    let upgraded = upgraded.id_typed();
    assert_eq!(original.id_typed(), sword);
    assert_eq!(original.attribute(DAMAGE), Some(10.0));

    let events = inventory.take_events();
    assert_eq!(events.len() as u64, inventory.version());
    assert_eq!(events[0].event_type(), "inventory.item.added");
    match &events[1] {
        InventoryEvent::ItemUpgraded(e) => {
            assert_eq!(e.original_id, sword);
            assert_eq!(e.upgraded_id, upgraded);
            assert_eq!(e.attribute, DAMAGE);
            assert_eq!(e.inventory_id, inventory.id_typed());
        }
        other => panic!("Expected ItemUpgraded, got {other:?}"),
    }
    assert!(events.iter().all(|e| e.version() == 1));
}
