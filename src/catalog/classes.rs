//! Character classes: starting stats, level-up growth and special attacks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    Warrior,
    Mage,
    Archer,
}

impl ClassKind {
    pub const ALL: [ClassKind; 3] = [ClassKind::Warrior, ClassKind::Mage, ClassKind::Archer];

    pub fn display_name(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Воин",
            ClassKind::Mage => "Маг",
            ClassKind::Archer => "Лучник",
        }
    }
}

/// A full stat block: starting values or per-level increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    pub hp: u32,
    pub mp: u32,
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    pub critical: u32,
    pub luck: u32,
}

/// Numeric shape of a class special attack.
///
/// `damage = base - enemy_defense / defense_divisor`, where
/// `base = strength * strength_factor + max_mp * max_mp_factor`, then the
/// jitter roll and the minimum-1 floor apply. Class-specific bonuses (the
/// mage's burn, the archer's crit) live in the combat engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialAttack {
    pub name: &'static str,
    pub strength_factor: f64,
    pub max_mp_factor: f64,
    pub defense_divisor: f64,
    pub jitter: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassSpec {
    pub kind: ClassKind,
    pub starting: StatBlock,
    pub growth: StatBlock,
    pub special: SpecialAttack,
    /// Items (name, count) every fresh character of this class owns.
    pub starting_items: &'static [(&'static str, u32)],
}

static WARRIOR: ClassSpec = ClassSpec {
    kind: ClassKind::Warrior,
    starting: StatBlock {
        hp: 120,
        mp: 20,
        strength: 10,
        defense: 8,
        agility: 5,
        critical: 5,
        luck: 3,
    },
    growth: StatBlock {
        hp: 20,
        mp: 5,
        strength: 3,
        defense: 2,
        agility: 1,
        critical: 1,
        luck: 1,
    },
    special: SpecialAttack {
        name: "Мощный удар",
        strength_factor: 3.0,
        max_mp_factor: 0.0,
        defense_divisor: 3.0,
        jitter: (0.9, 1.3),
    },
    starting_items: &[
        ("Железный меч", 1),
        ("Кожаная броня", 1),
        ("Зелье здоровья", 2),
    ],
};

static MAGE: ClassSpec = ClassSpec {
    kind: ClassKind::Mage,
    starting: StatBlock {
        hp: 80,
        mp: 100,
        strength: 4,
        defense: 4,
        agility: 7,
        critical: 3,
        luck: 5,
    },
    growth: StatBlock {
        hp: 10,
        mp: 20,
        strength: 1,
        defense: 1,
        agility: 2,
        critical: 1,
        luck: 2,
    },
    special: SpecialAttack {
        name: "Огненный шар",
        strength_factor: 2.0,
        max_mp_factor: 0.1,
        defense_divisor: 4.0,
        jitter: (0.9, 1.4),
    },
    starting_items: &[
        ("Магический посох", 1),
        ("Магическая мантия", 1),
        ("Зелье маны", 2),
    ],
};

static ARCHER: ClassSpec = ClassSpec {
    kind: ClassKind::Archer,
    starting: StatBlock {
        hp: 90,
        mp: 50,
        strength: 7,
        defense: 5,
        agility: 10,
        critical: 8,
        luck: 7,
    },
    growth: StatBlock {
        hp: 15,
        mp: 10,
        strength: 2,
        defense: 1,
        agility: 3,
        critical: 2,
        luck: 1,
    },
    special: SpecialAttack {
        name: "Меткий выстрел",
        strength_factor: 2.5,
        max_mp_factor: 0.0,
        defense_divisor: 3.0,
        jitter: (0.9, 1.2),
    },
    starting_items: &[
        ("Железный меч", 1),
        ("Сапоги быстроты", 1),
        ("Зелье здоровья", 2),
    ],
};

pub fn class_spec(kind: ClassKind) -> &'static ClassSpec {
    match kind {
        ClassKind::Warrior => &WARRIOR,
        ClassKind::Mage => &MAGE,
        ClassKind::Archer => &ARCHER,
    }
}
