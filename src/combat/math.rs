//! Pure combat math, shared by the engine, the simulator and tests.
//!
//! Chance and damage formulas take already-rolled inputs (crit flag, jitter
//! factor) so outcomes are reproducible independent of any randomness; the
//! small `roll_*` helpers at the bottom are the only functions that draw
//! from an RNG.

use rand::Rng;

use crate::catalog::SpecialAttack;
use crate::constants::*;

/// Chance for the enemy to dodge a basic attack.
///
/// Grows with enemy agility (capped at 30%), shrinks with the attacker's
/// luck: 100 luck cancels it entirely.
pub fn dodge_chance(enemy_agility: u32, attacker_luck: u32) -> f64 {
    let base = (f64::from(enemy_agility) / DODGE_AGILITY_DIVISOR).min(DODGE_CHANCE_CAP);
    base * (1.0 - f64::from(attacker_luck) / LUCK_PERCENT_DIVISOR)
}

/// Chance for a basic attack to crit, capped at 50%.
pub fn crit_chance(critical: u32) -> f64 {
    (f64::from(critical) / 100.0).min(CRIT_CHANCE_CAP)
}

/// Chance for the enemy to miss the character.
///
/// Grows with the character's agility (capped at 20%) and is further
/// amplified by luck.
pub fn miss_chance(agility: u32, luck: u32) -> f64 {
    let base = (f64::from(agility) / MISS_AGILITY_DIVISOR).min(MISS_CHANCE_CAP);
    base * (1.0 + f64::from(luck) / LUCK_PERCENT_DIVISOR)
}

/// Crit chance of the archer's special attack, capped at 70%.
pub fn archer_special_crit_chance(agility: u32) -> f64 {
    (f64::from(agility) / ARCHER_SPECIAL_CRIT_DIVISOR).min(ARCHER_SPECIAL_CRIT_CAP)
}

/// Item drop chance after a victory: 30% base plus a luck bonus capped
/// at +10%.
pub fn drop_chance(luck: u32) -> f64 {
    ITEM_DROP_BASE_CHANCE
        + (f64::from(luck) / ITEM_DROP_LUCK_DIVISOR).min(ITEM_DROP_LUCK_BONUS_CAP)
}

/// Damage of a basic attack given the already-rolled crit flag and jitter.
///
/// `max(1, round((strength*2 [*1.8 on crit] - defense/2) * jitter))` —
/// a landed hit always deals at least 1.
pub fn attack_damage(strength: u32, enemy_defense: u32, crit: bool, jitter: f64) -> u32 {
    let mut base = f64::from(strength) * ATTACK_STRENGTH_FACTOR;
    if crit {
        base *= CRIT_DAMAGE_MULTIPLIER;
    }
    let raw = (base - f64::from(enemy_defense) / ATTACK_DEFENSE_DIVISOR) * jitter;
    raw.round().max(1.0) as u32
}

/// Damage of a class special attack given the class parameters and the
/// already-rolled crit flag (archer only) and jitter.
pub fn special_damage(
    special: &SpecialAttack,
    strength: u32,
    max_mp: u32,
    enemy_defense: u32,
    crit: bool,
    jitter: f64,
) -> u32 {
    let mut base = f64::from(strength) * special.strength_factor
        + f64::from(max_mp) * special.max_mp_factor;
    if crit {
        base *= ARCHER_SPECIAL_CRIT_MULTIPLIER;
    }
    let raw = (base - f64::from(enemy_defense) / special.defense_divisor) * jitter;
    raw.round().max(1.0) as u32
}

/// Damage of an enemy attack given the already-rolled jitter.
pub fn enemy_damage(enemy_strength: u32, character_defense: u32, jitter: f64) -> u32 {
    let base = f64::from(enemy_strength) * ENEMY_STRENGTH_FACTOR;
    let raw = (base - f64::from(character_defense) / ENEMY_DEFENSE_DIVISOR) * jitter;
    raw.round().max(1.0) as u32
}

/// Rolls against a probability in [0, 1].
pub fn roll(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// Draws a jitter factor uniformly from the given range.
pub fn roll_jitter(range: (f64, f64), rng: &mut impl Rng) -> f64 {
    rng.gen_range(range.0..range.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{class_spec, ClassKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_warrior_baseline_attack_damage() {
        // Level-1 warrior (str 10) vs goblin (def 3), no crit, jitter pinned:
        // round((10*2 - 3/2) * 1.0) = round(18.5) = 19
        assert_eq!(attack_damage(10, 3, false, 1.0), 19);
    }

    #[test]
    fn test_attack_damage_floors_at_one() {
        // Defense far beyond the attack still leaves 1 damage
        assert_eq!(attack_damage(1, 1_000, false, 1.2), 1);
        assert_eq!(enemy_damage(1, 1_000, 1.2), 1);
    }

    #[test]
    fn test_crit_multiplies_base_before_mitigation() {
        // round((10*2*1.8 - 3/2) * 1.0) = round(34.5) = 35
        assert_eq!(attack_damage(10, 3, true, 1.0), 35);
    }

    #[test]
    fn test_enemy_damage_formula() {
        // round((5*1.5 - 8/2) * 1.0) = round(3.5) = 4
        assert_eq!(enemy_damage(5, 8, 1.0), 4);
    }

    #[test]
    fn test_special_damage_per_class() {
        let warrior = &class_spec(ClassKind::Warrior).special;
        // round((10*3 - 3/3) * 1.0) = 29
        assert_eq!(special_damage(warrior, 10, 20, 3, false, 1.0), 29);

        let mage = &class_spec(ClassKind::Mage).special;
        // round((4*2 + 100/10 - 3/4) * 1.0) = round(17.25) = 17
        assert_eq!(special_damage(mage, 4, 100, 3, false, 1.0), 17);

        let archer = &class_spec(ClassKind::Archer).special;
        // round((7*2.5 - 3/3) * 1.0) = round(16.5) = 17
        assert_eq!(special_damage(archer, 7, 50, 3, false, 1.0), 17);
        // Crit multiplies the base: round((7*2.5*1.5 - 1) * 1.0) = round(25.25) = 25
        assert_eq!(special_damage(archer, 7, 50, 3, true, 1.0), 25);
    }

    #[test]
    fn test_dodge_chance_caps_and_luck_reduction() {
        assert_eq!(dodge_chance(9, 0), 0.3);
        assert_eq!(dodge_chance(100, 0), 0.3);
        assert!((dodge_chance(9, 50) - 0.15).abs() < 1e-12);
        assert_eq!(dodge_chance(0, 0), 0.0);
    }

    #[test]
    fn test_miss_chance_caps_and_luck_amplification() {
        assert_eq!(miss_chance(8, 0), 0.2);
        assert_eq!(miss_chance(100, 0), 0.2);
        assert!((miss_chance(8, 50) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_crit_chance_cap() {
        assert_eq!(crit_chance(10), 0.1);
        assert_eq!(crit_chance(80), 0.5);
    }

    #[test]
    fn test_archer_special_crit_cap() {
        assert!((archer_special_crit_chance(10) - 0.5).abs() < 1e-12);
        assert_eq!(archer_special_crit_chance(100), 0.7);
    }

    #[test]
    fn test_drop_chance_luck_bonus_is_capped() {
        assert_eq!(drop_chance(0), 0.3);
        assert!((drop_chance(10) - 0.35).abs() < 1e-12);
        // 100 luck would be +0.5 uncapped; the bonus stops at +0.1
        assert!((drop_chance(100) - 0.4).abs() < 1e-12);
        assert!((drop_chance(255) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_roll_jitter_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let j = roll_jitter((0.8, 1.2), &mut rng);
            assert!((0.8..1.2).contains(&j));
        }
    }

    #[test]
    fn test_roll_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(roll(1.0, &mut rng));
            assert!(!roll(0.0, &mut rng));
        }
    }
}
