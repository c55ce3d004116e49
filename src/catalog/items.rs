//! Item reference data.

use crate::character::attributes::Attribute;
use crate::character::equipment::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Consumable,
    Weapon,
    Armor,
    Boots,
    Accessory,
}

impl ItemKind {
    /// The equipment slot this kind occupies, `None` for consumables.
    pub fn slot(self) -> Option<Slot> {
        match self {
            ItemKind::Consumable => None,
            ItemKind::Weapon => Some(Slot::Weapon),
            ItemKind::Armor => Some(Slot::Armor),
            ItemKind::Boots => Some(Slot::Boots),
            ItemKind::Accessory => Some(Slot::Accessory),
        }
    }

    pub fn is_equipment(self) -> bool {
        self.slot().is_some()
    }
}

/// Stat effects of an item.
///
/// Equipment contributes the five attribute fields to derived stats;
/// consumables restore `hp`/`mp` on use. The staff and mantle also carry an
/// `mp` bonus which, as in the base game, no derived stat reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBonuses {
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    pub critical: u32,
    pub luck: u32,
    pub hp: u32,
    pub mp: u32,
}

pub const NO_BONUS: StatBonuses = StatBonuses {
    strength: 0,
    defense: 0,
    agility: 0,
    critical: 0,
    luck: 0,
    hp: 0,
    mp: 0,
};

impl StatBonuses {
    pub fn attribute(&self, attr: Attribute) -> u32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Defense => self.defense,
            Attribute::Agility => self.agility,
            Attribute::Critical => self.critical,
            Attribute::Luck => self.luck,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDef {
    pub name: &'static str,
    pub kind: ItemKind,
    pub bonuses: StatBonuses,
    /// Shop purchase price in gold.
    pub value: u64,
    pub description: &'static str,
}

pub static ITEMS: &[ItemDef] = &[
    ItemDef {
        name: "Зелье здоровья",
        kind: ItemKind::Consumable,
        bonuses: StatBonuses { hp: 50, ..NO_BONUS },
        value: 20,
        description: "Восстанавливает 50 ОЗ",
    },
    ItemDef {
        name: "Зелье маны",
        kind: ItemKind::Consumable,
        bonuses: StatBonuses { mp: 30, ..NO_BONUS },
        value: 25,
        description: "Восстанавливает 30 ОМ",
    },
    ItemDef {
        name: "Железный меч",
        kind: ItemKind::Weapon,
        bonuses: StatBonuses {
            strength: 5,
            ..NO_BONUS
        },
        value: 100,
        description: "+5 к Силе",
    },
    ItemDef {
        name: "Стальной меч",
        kind: ItemKind::Weapon,
        bonuses: StatBonuses {
            strength: 10,
            ..NO_BONUS
        },
        value: 250,
        description: "+10 к Силе",
    },
    ItemDef {
        name: "Кожаная броня",
        kind: ItemKind::Armor,
        bonuses: StatBonuses {
            defense: 5,
            ..NO_BONUS
        },
        value: 120,
        description: "+5 к Защите",
    },
    ItemDef {
        name: "Стальная броня",
        kind: ItemKind::Armor,
        bonuses: StatBonuses {
            defense: 10,
            ..NO_BONUS
        },
        value: 300,
        description: "+10 к Защите",
    },
    ItemDef {
        name: "Сапоги быстроты",
        kind: ItemKind::Boots,
        bonuses: StatBonuses {
            agility: 5,
            ..NO_BONUS
        },
        value: 150,
        description: "+5 к Ловкости",
    },
    ItemDef {
        name: "Магический посох",
        kind: ItemKind::Weapon,
        bonuses: StatBonuses {
            strength: 3,
            mp: 20,
            ..NO_BONUS
        },
        value: 200,
        description: "+3 к Силе, +20 ОМ",
    },
    ItemDef {
        name: "Магическая мантия",
        kind: ItemKind::Armor,
        bonuses: StatBonuses {
            defense: 3,
            mp: 15,
            ..NO_BONUS
        },
        value: 180,
        description: "+3 к Защите, +15 ОМ",
    },
    ItemDef {
        name: "Амулет удачи",
        kind: ItemKind::Accessory,
        bonuses: StatBonuses { luck: 5, ..NO_BONUS },
        value: 220,
        description: "+5 к Удаче",
    },
    ItemDef {
        name: "Кольцо критического удара",
        kind: ItemKind::Accessory,
        bonuses: StatBonuses {
            critical: 7,
            ..NO_BONUS
        },
        value: 280,
        description: "+7 к Шансу крит. удара",
    },
];

/// Looks up an item by its exact name.
pub fn item(name: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|i| i.name == name)
}
