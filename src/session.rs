//! Session-level policies layered outside the combat engine: fleeing,
//! defeat recovery, random encounters, the village shop and tavern.
//!
//! These are deliberately not engine logic — the engine only reports
//! terminal states, and the surrounding session decides what they mean.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{self, EnemyDef, LocationDef};
use crate::character::Character;
use crate::combat::math::roll;
use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown item {0:?}")]
    UnknownItem(String),
    #[error("not enough gold: need {need}, have {have}")]
    NotEnoughGold { need: u64, have: u64 },
    #[error("item {0:?} is not in the inventory")]
    NotOwned(String),
    #[error("item {0:?} is currently equipped")]
    ItemEquipped(String),
    #[error("unknown location {0:?}")]
    UnknownLocation(String),
    #[error("this is only possible in the village")]
    NotInVillage,
}

/// What exploring the current location turned up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExploreOutcome {
    /// An enemy appeared; the session should start an encounter.
    Encounter(&'static EnemyDef),
    /// A consumable was found and added to the inventory.
    FoundItem(&'static str),
    /// Gold was found and added to the purse.
    FoundGold(u64),
    Nothing,
}

/// Fixed 50% escape odds, independent of any stat.
pub fn roll_flee(rng: &mut impl Rng) -> bool {
    roll(FLEE_SUCCESS_CHANCE, rng)
}

/// Whether travel between locations runs into an ambush.
pub fn roll_travel_ambush(rng: &mut impl Rng) -> bool {
    roll(TRAVEL_AMBUSH_CHANCE, rng)
}

/// Defeat recovery: the character comes to with 1 hp back in the village.
pub fn revive_at_village(character: &mut Character) {
    character.hp = REVIVE_HP;
    character.location = catalog::STARTING_LOCATION.to_string();
    info!(name = %character.name, "revived in the village");
}

/// Picks a uniformly random enemy from a location's spawn list.
pub fn pick_enemy(location: &LocationDef, rng: &mut impl Rng) -> Option<&'static EnemyDef> {
    if location.enemies.is_empty() {
        return None;
    }
    let name = location.enemies[rng.gen_range(0..location.enemies.len())];
    catalog::enemy(name)
}

/// Explores the character's current location: either an enemy shows up
/// (per the location's encounter chance) or the character may stumble on a
/// potion or some gold.
pub fn explore(
    character: &mut Character,
    rng: &mut impl Rng,
) -> Result<ExploreOutcome, SessionError> {
    let location = catalog::location(&character.location)
        .ok_or_else(|| SessionError::UnknownLocation(character.location.clone()))?;

    if roll(location.encounter_chance, rng) {
        if let Some(enemy) = pick_enemy(location, rng) {
            debug!(location = location.name, enemy = enemy.name, "encounter");
            return Ok(ExploreOutcome::Encounter(enemy));
        }
    }

    if roll(EXPLORE_FIND_CHANCE, rng) {
        if roll(EXPLORE_POTION_SHARE, rng) {
            let item = if rng.gen::<bool>() {
                "Зелье здоровья"
            } else {
                "Зелье маны"
            };
            character.inventory.add(item, 1);
            return Ok(ExploreOutcome::FoundItem(item));
        }
        let gold = rng.gen_range(EXPLORE_GOLD_MIN..=EXPLORE_GOLD_MAX);
        character.gold += gold;
        return Ok(ExploreOutcome::FoundGold(gold));
    }

    Ok(ExploreOutcome::Nothing)
}

fn require_village(character: &Character) -> Result<(), SessionError> {
    if character.location != catalog::STARTING_LOCATION {
        return Err(SessionError::NotInVillage);
    }
    Ok(())
}

/// Buys one item at catalog price. Village only. Returns the price paid.
pub fn buy(character: &mut Character, item_name: &str) -> Result<u64, SessionError> {
    require_village(character)?;
    let def =
        catalog::item(item_name).ok_or_else(|| SessionError::UnknownItem(item_name.to_string()))?;
    if character.gold < def.value {
        return Err(SessionError::NotEnoughGold {
            need: def.value,
            have: character.gold,
        });
    }
    character.gold -= def.value;
    character.inventory.add(item_name, 1);
    debug!(item = item_name, price = def.value, "bought");
    Ok(def.value)
}

/// Sells one item at half price. Village only; equipped items must be
/// taken off first. Returns the gold received.
pub fn sell(character: &mut Character, item_name: &str) -> Result<u64, SessionError> {
    require_village(character)?;
    let def =
        catalog::item(item_name).ok_or_else(|| SessionError::UnknownItem(item_name.to_string()))?;
    if character.equipment.is_equipped(item_name) {
        return Err(SessionError::ItemEquipped(item_name.to_string()));
    }
    if character.inventory.count(item_name) == 0 {
        return Err(SessionError::NotOwned(item_name.to_string()));
    }

    let price = def.value / SELL_PRICE_DIVISOR;
    character.inventory.remove(item_name, 1);
    character.gold += price;
    debug!(item = item_name, price, "sold");
    Ok(price)
}

/// A night at the tavern: costs 10 gold, restores hp and mp in full.
pub fn rest(character: &mut Character) -> Result<(), SessionError> {
    require_village(character)?;
    if character.gold < REST_COST {
        return Err(SessionError::NotEnoughGold {
            need: REST_COST,
            have: character.gold,
        });
    }
    character.gold -= REST_COST;
    character.fully_restore();
    Ok(())
}
