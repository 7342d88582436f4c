//! Starter-kit walkthrough: build a medieval kit, use it, combine, describe.

use anyhow::Context;

use gearbag_events::Event;
use gearbag_inventory::attributes::DAMAGE;
use gearbag_inventory::{ItemFactory, MedievalItemFactory, PlayerInventory};

fn main() -> anyhow::Result<()> {
    gearbag_observability::init();

    let factory = MedievalItemFactory;
    let mut inventory = PlayerInventory::new();
    tracing::info!(inventory_id = %inventory.id_typed(), "inventory opened");

    let sword = inventory.add(factory.basic_weapon())?;
    let armor = inventory.add(factory.basic_armor())?;
    let potion = inventory.add(factory.healing_potion())?;
    let quest = inventory.add(factory.quest_item("Amulet of Dawn")?)?;

    for item_id in [sword, armor, potion, quest] {
        let outcome = inventory.use_item(item_id);
        tracing::info!(success = outcome.success, "{}", outcome.message);
    }

    let potion2 = inventory.add(factory.healing_potion())?;
    let enhanced = inventory
        .combine(sword, potion2)
        .context("combining sword with potion")?;
    tracing::info!(
        name = enhanced.name(),
        damage = enhanced.attribute(DAMAGE).unwrap_or_default(),
        "new weapon"
    );

    for event in inventory.take_events() {
        let payload = serde_json::to_string(&event).context("serializing event")?;
        tracing::debug!(event_type = event.event_type(), %payload, "event");
    }

    println!("{}", inventory.describe());
    Ok(())
}
