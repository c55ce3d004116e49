//! Static reference data: items, enemies, quests, locations and classes.
//!
//! Tables are immutable and read-only; anything that needs a mutable copy
//! (a combat enemy, a character's starting kit) clones explicitly.

mod classes;
mod enemies;
mod items;
mod locations;
mod quests;

pub use classes::{class_spec, ClassKind, ClassSpec, SpecialAttack, StatBlock};
pub use enemies::{enemy, EnemyDef, ENEMIES};
pub use items::{item, ItemDef, ItemKind, StatBonuses, ITEMS, NO_BONUS};
pub use locations::{location, LocationDef, LOCATIONS, STARTING_LOCATION};
pub use quests::{quest, QuestDef, QuestObjective, QuestRewards, QUESTS};
