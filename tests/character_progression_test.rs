//! Leveling, derived stats and inventory behavior across the classes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skazka::catalog::{class_spec, ClassKind};
use skazka::character::Attribute;
use skazka::constants::MAX_LEVEL;
use skazka::Character;

#[test]
fn test_xp_and_level_never_decrease_under_random_grants() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut hero = Character::new("Иван", ClassKind::Archer);

    let mut last_xp = hero.xp;
    let mut last_level = hero.level;
    for _ in 0..500 {
        hero.add_xp(rng.gen_range(0..200));
        assert!(hero.xp >= last_xp);
        assert!(hero.level >= last_level);
        last_xp = hero.xp;
        last_level = hero.level;
    }
}

#[test]
fn test_each_level_strictly_raises_pools_and_restores_them() {
    for class in ClassKind::ALL {
        let mut hero = Character::new("Герой", class);
        while hero.level < MAX_LEVEL {
            let max_hp_before = hero.max_hp;
            let max_mp_before = hero.max_mp;
            hero.hp = 1;
            let needed = hero.xp_next - hero.xp;
            let ups = hero.add_xp(needed);
            assert_eq!(ups.len(), 1, "{:?} at level {}", class, hero.level);
            assert!(hero.max_hp > max_hp_before);
            assert!(hero.max_mp > max_mp_before);
            assert_eq!(hero.hp, hero.max_hp);
            assert_eq!(hero.mp, hero.max_mp);
        }
    }
}

#[test]
fn test_twenty_levels_of_growth_match_the_class_tables() {
    for class in ClassKind::ALL {
        let spec = class_spec(class);
        let mut hero = Character::new("Герой", class);
        hero.add_xp(10_000_000);
        assert_eq!(hero.level, MAX_LEVEL);

        let levels_gained = MAX_LEVEL - 1;
        assert_eq!(
            hero.max_hp,
            spec.starting.hp + spec.growth.hp * levels_gained
        );
        assert_eq!(
            hero.max_mp,
            spec.starting.mp + spec.growth.mp * levels_gained
        );
        assert_eq!(
            hero.base.strength,
            spec.starting.strength + spec.growth.strength * levels_gained
        );
        assert_eq!(
            hero.base.luck,
            spec.starting.luck + spec.growth.luck * levels_gained
        );
    }
}

#[test]
fn test_derived_stats_follow_equipment_for_every_class() {
    for class in ClassKind::ALL {
        let mut hero = Character::new("Герой", class);
        let naked: Vec<u32> = Attribute::ALL.iter().map(|a| hero.attribute(*a)).collect();

        // Dress up in everything the class starts with
        let starting: Vec<&str> = class_spec(class)
            .starting_items
            .iter()
            .map(|(name, _)| *name)
            .collect();
        for item in &starting {
            let _ = hero.equip(item);
        }
        assert!(hero.equipment.iter_equipped().count() > 0);

        // Undress again: equip nothing is not possible, so check via bonus
        // arithmetic instead — base attributes must be untouched.
        for (attr, naked_value) in Attribute::ALL.iter().zip(&naked) {
            assert_eq!(hero.base.get(*attr), *naked_value);
            assert!(hero.attribute(*attr) >= *naked_value);
        }
    }
}

#[test]
fn test_consumables_are_class_agnostic() {
    let mut hero = Character::new("Маруся", ClassKind::Mage);
    hero.mp = 0;
    let restored = hero.use_consumable("Зелье маны").expect("drink");
    assert_eq!(restored.mp, 30);
    assert_eq!(restored.hp, 0);
    assert_eq!(hero.mp, 30);
    assert_eq!(hero.inventory.count("Зелье маны"), 1);
}
