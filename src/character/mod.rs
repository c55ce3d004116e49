//! The player character: stats, equipment, inventory, leveling and quests.
//!
//! Derived attributes are always computed from base stats plus equipped
//! item bonuses; nothing caches them. All fallible operations leave the
//! character untouched when they fail.

pub mod attributes;
pub mod equipment;
pub mod inventory;
pub mod quest_log;

use thiserror::Error;
use tracing::info;

use crate::catalog::{self, ClassKind, QuestDef};
use crate::constants::{MAX_LEVEL, STARTING_GOLD, XP_THRESHOLD};

pub use attributes::{Attribute, BaseAttributes};
pub use equipment::{Equipment, Slot};
pub use inventory::Inventory;
pub use quest_log::QuestLog;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item {0:?} is not in the inventory")]
    NotOwned(String),
    #[error("item {0:?} cannot be used that way")]
    WrongItemType(String),
    #[error("unknown item {0:?}")]
    UnknownItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestError {
    #[error("unknown quest id {0:?}")]
    Unknown(String),
    #[error("quest {0:?} is already active or completed")]
    AlreadyActiveOrCompleted(String),
    #[error("quest {0:?} is not active")]
    NotActive(String),
}

/// One gained level, for the session to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub max_hp: u32,
    pub max_mp: u32,
}

/// What a consumable actually restored (after capping at the maxima).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restored {
    pub hp: u32,
    pub mp: u32,
}

/// Progress made on one quest by a defeat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestProgressUpdate {
    pub quest: &'static QuestDef,
    pub current: u32,
    pub required: u32,
}

/// A quest finished and paid out.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestCompletion {
    pub quest: &'static QuestDef,
    pub level_ups: Vec<LevelUp>,
}

/// Everything a single enemy defeat did to the quest log.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefeatRecord {
    pub updates: Vec<QuestProgressUpdate>,
    pub completed: Vec<QuestCompletion>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub class: ClassKind,
    pub level: u32,
    pub xp: u64,
    /// Total xp required for the next level: `XP_THRESHOLD * (level + 1)`,
    /// recomputed at every level-up.
    pub xp_next: u64,
    pub gold: u64,
    pub max_hp: u32,
    pub hp: u32,
    pub max_mp: u32,
    pub mp: u32,
    pub base: BaseAttributes,
    pub equipment: Equipment,
    pub inventory: Inventory,
    pub location: String,
    pub quest_log: QuestLog,
}

impl Character {
    /// Creates a fresh character with the class's starting stats and kit,
    /// standing in the starting location.
    pub fn new(name: impl Into<String>, class: ClassKind) -> Self {
        let spec = catalog::class_spec(class);
        let mut inventory = Inventory::new();
        for (item, count) in spec.starting_items {
            inventory.add(item, *count);
        }

        Self {
            name: name.into(),
            class,
            level: 1,
            xp: 0,
            xp_next: XP_THRESHOLD,
            gold: STARTING_GOLD,
            max_hp: spec.starting.hp,
            hp: spec.starting.hp,
            max_mp: spec.starting.mp,
            mp: spec.starting.mp,
            base: BaseAttributes {
                strength: spec.starting.strength,
                defense: spec.starting.defense,
                agility: spec.starting.agility,
                critical: spec.starting.critical,
                luck: spec.starting.luck,
            },
            equipment: Equipment::new(),
            inventory,
            location: catalog::STARTING_LOCATION.to_string(),
            quest_log: QuestLog::new(),
        }
    }

    /// Derived attribute: base value plus every equipped item's bonus.
    pub fn attribute(&self, attr: Attribute) -> u32 {
        let bonus: u32 = self
            .equipment
            .iter_equipped()
            .filter_map(catalog::item)
            .map(|item| item.bonuses.attribute(attr))
            .sum();
        self.base.get(attr) + bonus
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Grants experience, leveling as long as the (recomputed) threshold is
    /// met and the level cap allows. Past `MAX_LEVEL` xp keeps accumulating
    /// but is inert.
    pub fn add_xp(&mut self, amount: u64) -> Vec<LevelUp> {
        self.xp += amount;
        let mut level_ups = Vec::new();
        while self.xp >= self.xp_next && self.level < MAX_LEVEL {
            level_ups.push(self.level_up());
        }
        level_ups
    }

    fn level_up(&mut self) -> LevelUp {
        let growth = catalog::class_spec(self.class).growth;
        self.level += 1;
        self.max_hp += growth.hp;
        self.max_mp += growth.mp;
        self.base.strength += growth.strength;
        self.base.defense += growth.defense;
        self.base.agility += growth.agility;
        self.base.critical += growth.critical;
        self.base.luck += growth.luck;

        // A new level fully restores both pools.
        self.hp = self.max_hp;
        self.mp = self.max_mp;
        self.xp_next = XP_THRESHOLD * u64::from(self.level + 1);

        info!(name = %self.name, level = self.level, "level up");
        LevelUp {
            new_level: self.level,
            max_hp: self.max_hp,
            max_mp: self.max_mp,
        }
    }

    /// Equips an item from the inventory, returning whatever previously
    /// occupied its slot (that item goes back to the inventory).
    pub fn equip(&mut self, item_name: &str) -> Result<Option<String>, ItemError> {
        if self.inventory.count(item_name) == 0 {
            return Err(ItemError::NotOwned(item_name.to_string()));
        }
        let def = catalog::item(item_name)
            .ok_or_else(|| ItemError::UnknownItem(item_name.to_string()))?;
        let Some(slot) = def.kind.slot() else {
            return Err(ItemError::WrongItemType(item_name.to_string()));
        };

        self.inventory.remove(item_name, 1);
        let previous = self.equipment.set(slot, Some(item_name.to_string()));
        if let Some(prev) = &previous {
            self.inventory.add(prev, 1);
        }
        Ok(previous)
    }

    /// Drinks a consumable: restores hp/mp capped at the maxima and spends
    /// one charge from the inventory.
    pub fn use_consumable(&mut self, item_name: &str) -> Result<Restored, ItemError> {
        if self.inventory.count(item_name) == 0 {
            return Err(ItemError::NotOwned(item_name.to_string()));
        }
        let def = catalog::item(item_name)
            .ok_or_else(|| ItemError::UnknownItem(item_name.to_string()))?;
        if def.kind != catalog::ItemKind::Consumable {
            return Err(ItemError::WrongItemType(item_name.to_string()));
        }

        let hp_restored = def.bonuses.hp.min(self.max_hp - self.hp);
        let mp_restored = def.bonuses.mp.min(self.max_mp - self.mp);
        self.hp += hp_restored;
        self.mp += mp_restored;
        self.inventory.remove(item_name, 1);

        Ok(Restored {
            hp: hp_restored,
            mp: mp_restored,
        })
    }

    /// Accepts a quest from the catalog.
    pub fn accept_quest(&mut self, quest_id: &str) -> Result<&'static QuestDef, QuestError> {
        let def =
            catalog::quest(quest_id).ok_or_else(|| QuestError::Unknown(quest_id.to_string()))?;
        if self.quest_log.is_active(quest_id) || self.quest_log.is_completed(quest_id) {
            return Err(QuestError::AlreadyActiveOrCompleted(quest_id.to_string()));
        }
        self.quest_log.activate(quest_id);
        Ok(def)
    }

    /// Registers a defeated enemy with every matching active quest and
    /// immediately completes (and pays out) any quest that reached its
    /// required count. A no-op for enemies no active quest targets.
    pub fn record_defeat(&mut self, enemy_name: &str) -> DefeatRecord {
        let mut record = DefeatRecord::default();
        let mut ready = Vec::new();

        for (id, current) in self.quest_log.record_defeat(enemy_name) {
            let Some(quest) = catalog::quest(&id) else {
                continue;
            };
            record.updates.push(QuestProgressUpdate {
                quest,
                current,
                required: quest.objective.count,
            });
            if current >= quest.objective.count {
                ready.push(id);
            }
        }

        for id in ready {
            if let Ok(completion) = self.complete_quest(&id) {
                record.completed.push(completion);
            }
        }
        record
    }

    /// Completes an active quest: grants xp, gold and reward items, then
    /// moves the id to the completed set.
    pub fn complete_quest(&mut self, quest_id: &str) -> Result<QuestCompletion, QuestError> {
        let quest =
            catalog::quest(quest_id).ok_or_else(|| QuestError::Unknown(quest_id.to_string()))?;
        if !self.quest_log.finish(quest_id) {
            return Err(QuestError::NotActive(quest_id.to_string()));
        }

        let level_ups = self.add_xp(quest.rewards.xp);
        self.gold += quest.rewards.gold;
        for item in quest.rewards.items {
            self.inventory.add(item, 1);
        }

        info!(name = %self.name, quest = quest_id, "quest completed");
        Ok(QuestCompletion { quest, level_ups })
    }

    /// Refills hp and mp to their maxima (tavern rest, level up aftermath).
    pub fn fully_restore(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }
}
