//! Derived-construction rules for combining two items.

use gearbag_core::{DomainError, DomainResult};

use crate::attributes::{DAMAGE, DEFENSE, HEAL, WEIGHT};
use crate::item::Item;
use crate::kind::ItemKind;

/// Multiplier applied to the summed primary stat of two same-kind items.
pub const SAME_KIND_BONUS: f64 = 1.1;

/// Share of a potion's Heal that becomes extra weapon Damage.
pub const POTION_INFUSION_DIVISOR: f64 = 10.0;

/// Base magnitude assumed when the base item lacks an attribute.
const BASE_FALLBACK: f64 = 1.0;

/// Contribution assumed when the material lacks an attribute.
const MATERIAL_FALLBACK: f64 = 0.0;

/// Compute the item produced by combining `base` with `material`.
///
/// Pure: neither input is touched, and the result is a new entity.
pub fn combine(base: &Item, material: &Item) -> DomainResult<Item> {
    match (base.kind(), material.kind()) {
        (ItemKind::Weapon, ItemKind::Weapon) => {
            let (damage, weight) = merge_stat(base, material, DAMAGE);
            Ok(Item::weapon(
                joined_name(base, material),
                "Combined weapon",
                damage,
                weight,
            ))
        }
        (ItemKind::Armor, ItemKind::Armor) => {
            let (defense, weight) = merge_stat(base, material, DEFENSE);
            Ok(Item::armor(
                joined_name(base, material),
                "Combined armor",
                defense,
                weight,
            ))
        }
        (ItemKind::Weapon, ItemKind::Potion) => {
            let damage = base.attributes().get_or(DAMAGE, BASE_FALLBACK)
                + material.attributes().get_or(HEAL, MATERIAL_FALLBACK) / POTION_INFUSION_DIVISOR;
            let weight = base.attributes().get_or(WEIGHT, BASE_FALLBACK);
            Ok(Item::weapon(
                format!("{}+Enhanced", base.name()),
                base.description(),
                damage,
                weight,
            ))
        }
        (base_kind, material_kind) => Err(DomainError::unsupported(format!(
            "unsupported combination: {base_kind} + {material_kind}"
        ))),
    }
}

/// `(primary stat, weight)` for a same-kind merge.
fn merge_stat(base: &Item, material: &Item, primary: &str) -> (f64, f64) {
    let (b, m) = (base.attributes(), material.attributes());
    let stat = (b.get_or(primary, BASE_FALLBACK) + m.get_or(primary, MATERIAL_FALLBACK))
        * SAME_KIND_BONUS;
    let weight = b.get_or(WEIGHT, BASE_FALLBACK) + m.get_or(WEIGHT, MATERIAL_FALLBACK);
    (stat, weight)
}

fn joined_name(base: &Item, material: &Item) -> String {
    format!("{}+{}", base.name(), material.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_weapons_sum_with_bonus() {
        let short = Item::weapon("Short", "S", 5.0, 3.0);
        let blade = Item::weapon("Blade", "B", 7.0, 4.0);

        let result = combine(&short, &blade).unwrap();
        assert_eq!(result.kind(), ItemKind::Weapon);
        assert_eq!(result.name(), "Short+Blade");
        assert_eq!(result.description(), "Combined weapon");
        assert!(approx(result.attribute(DAMAGE).unwrap(), 13.2));
        assert!(approx(result.attribute(WEIGHT).unwrap(), 7.0));
    }

    #[test]
    fn two_armors_sum_with_bonus() {
        let a = Item::armor("Mail", "M", 10.0, 12.0);
        let b = Item::armor("Plate", "P", 20.0, 30.0);

        let result = combine(&a, &b).unwrap();
        assert_eq!(result.kind(), ItemKind::Armor);
        assert_eq!(result.name(), "Mail+Plate");
        assert!(approx(result.attribute(DEFENSE).unwrap(), 33.0));
        assert!(approx(result.attribute(WEIGHT).unwrap(), 42.0));
    }

    #[test]
    fn potion_infuses_weapon() {
        let sword = Item::weapon("Iron Sword", "Basic iron sword.", 10.0, 5.0);
        let potion = Item::potion("Minor Healing", "", 25.0);

        let result = combine(&sword, &potion).unwrap();
        assert_eq!(result.name(), "Iron Sword+Enhanced");
        assert_eq!(result.description(), "Basic iron sword.");
        assert!(approx(result.attribute(DAMAGE).unwrap(), 12.5));
        assert!(approx(result.attribute(WEIGHT).unwrap(), 5.0));
    }

    /// Items without any attributes only arise from deserialized data.
    fn bare(kind: &str, name: &str) -> Item {
        serde_json::from_value(serde_json::json!({
            "id": gearbag_core::ItemId::new(),
            "name": name,
            "description": "",
            "kind": kind,
            "attributes": {},
            "state": "InInventory",
        }))
        .unwrap()
    }

    #[test]
    fn missing_attributes_use_base_one_material_zero() {
        let result = combine(&bare("Weapon", "a"), &bare("Weapon", "b")).unwrap();
        assert!(approx(result.attribute(DAMAGE).unwrap(), 1.1));
        assert!(approx(result.attribute(WEIGHT).unwrap(), 1.0));

        let result = combine(&bare("Armor", "a"), &bare("Armor", "b")).unwrap();
        assert!(approx(result.attribute(DEFENSE).unwrap(), 1.1));

        let result = combine(&bare("Weapon", "a"), &bare("Potion", "p")).unwrap();
        assert!(approx(result.attribute(DAMAGE).unwrap(), 1.0));
        assert!(approx(result.attribute(WEIGHT).unwrap(), 1.0));
    }

    #[test]
    fn other_pairs_are_unsupported() {
        let weapon = Item::weapon("W", "", 1.0, 1.0);
        let armor = Item::armor("A", "", 1.0, 1.0);
        let potion = Item::potion("P", "", 1.0);
        let quest = Item::quest_item("Q", "");

        for (base, material) in [
            (&potion, &weapon),
            (&weapon, &armor),
            (&armor, &potion),
            (&quest, &quest),
            (&potion, &potion),
        ] {
            match combine(base, material).unwrap_err() {
                DomainError::Unsupported(msg) if msg.contains("unsupported combination") => {}
                other => panic!("Expected Unsupported, got {other:?}"),
            }
        }
    }
}
