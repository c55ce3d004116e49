//! The encounter engine.
//!
//! One `CombatEngine` drives exactly one encounter between the character and
//! a level-scaled enemy copy, alternating turns chosen by the session until
//! a terminal state. The engine mutates hp/mp and the effect list and
//! reports what happened as data events; it never renders, never revives,
//! and never resolves fleeing.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::math;
use super::types::{
    BattleRewards, CombatEvent, EffectKind, EffectTarget, Enemy, EncounterStatus, PlayerAction,
    StatusEffect, TurnReport,
};
use crate::catalog::{self, ClassKind, EnemyDef};
use crate::character::{Attribute, Character};
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("not enough mana: have {have}, need {need}")]
    InsufficientMana { have: u32, need: u32 },
    #[error("the encounter is already over")]
    EncounterOver,
}

const COMMON_DROP_POOL: &[&str] = &["Зелье здоровья", "Зелье маны"];
const RARE_DROP_POOL: &[&str] = &["Зелье здоровья", "Зелье маны", "Амулет удачи"];

pub struct CombatEngine {
    enemy: Enemy,
    effects: Vec<StatusEffect>,
    turn: u32,
    status: EncounterStatus,
    rewarded: bool,
}

impl CombatEngine {
    /// Starts an encounter against a copy of `template` scaled to the
    /// character's level. The template itself is never touched.
    pub fn new(character: &Character, template: &EnemyDef) -> Self {
        let enemy = Enemy::scaled(template, character.level);
        debug!(enemy = %enemy.name, hp = enemy.hp, level = character.level, "encounter start");
        Self {
            enemy,
            effects: Vec::new(),
            turn: 0,
            status: EncounterStatus::Ongoing,
            rewarded: false,
        }
    }

    pub fn status(&self) -> EncounterStatus {
        self.status
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn effects(&self) -> &[StatusEffect] {
        &self.effects
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_enemy_defeated(&self) -> bool {
        !self.enemy.is_alive()
    }

    /// Resolves the character's action. A dodged attack still counts as a
    /// spent turn; whether the enemy then acts is the session's call.
    pub fn player_turn(
        &mut self,
        character: &mut Character,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> Result<TurnReport, CombatError> {
        if self.status != EncounterStatus::Ongoing {
            return Err(CombatError::EncounterOver);
        }

        let mut events = Vec::new();
        match action {
            PlayerAction::Attack => self.basic_attack(character, rng, &mut events),
            PlayerAction::Special => self.special_attack(character, rng, &mut events)?,
        }

        self.turn += 1;
        self.process_effects(character, &mut events);
        self.update_status(character);
        Ok(TurnReport {
            events,
            status: self.status,
        })
    }

    /// Resolves the enemy's retaliation.
    pub fn enemy_turn(&mut self, character: &mut Character, rng: &mut impl Rng) -> TurnReport {
        let mut events = Vec::new();
        if self.status != EncounterStatus::Ongoing {
            return TurnReport {
                events,
                status: self.status,
            };
        }

        let agility = character.attribute(Attribute::Agility);
        let luck = character.attribute(Attribute::Luck);
        if math::roll(math::miss_chance(agility, luck), rng) {
            events.push(CombatEvent::EnemyMissed);
        } else {
            let jitter = math::roll_jitter(ENEMY_JITTER, rng);
            let damage = math::enemy_damage(
                self.enemy.strength,
                character.attribute(Attribute::Defense),
                jitter,
            );
            character.hp = character.hp.saturating_sub(damage);
            events.push(CombatEvent::EnemyAttack { damage });
        }

        self.turn += 1;
        self.process_effects(character, &mut events);
        self.update_status(character);
        TurnReport {
            events,
            status: self.status,
        }
    }

    fn basic_attack(
        &mut self,
        character: &Character,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) {
        let luck = character.attribute(Attribute::Luck);
        if math::roll(math::dodge_chance(self.enemy.agility, luck), rng) {
            events.push(CombatEvent::EnemyDodged);
            return;
        }

        let crit = math::roll(
            math::crit_chance(character.attribute(Attribute::Critical)),
            rng,
        );
        let jitter = math::roll_jitter(ATTACK_JITTER, rng);
        let damage = math::attack_damage(
            character.attribute(Attribute::Strength),
            self.enemy.defense,
            crit,
            jitter,
        );
        self.enemy.take_damage(damage);
        events.push(CombatEvent::PlayerAttack { damage, crit });
    }

    fn special_attack(
        &mut self,
        character: &mut Character,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), CombatError> {
        if character.mp < SPECIAL_MANA_COST {
            return Err(CombatError::InsufficientMana {
                have: character.mp,
                need: SPECIAL_MANA_COST,
            });
        }
        character.mp -= SPECIAL_MANA_COST;

        let special = &catalog::class_spec(character.class).special;
        let crit = character.class == ClassKind::Archer
            && math::roll(
                math::archer_special_crit_chance(character.attribute(Attribute::Agility)),
                rng,
            );
        let jitter = math::roll_jitter(special.jitter, rng);
        let damage = math::special_damage(
            special,
            character.attribute(Attribute::Strength),
            character.max_mp,
            self.enemy.defense,
            crit,
            jitter,
        );
        self.enemy.take_damage(damage);
        events.push(CombatEvent::SpecialAttack {
            name: special.name,
            damage,
            crit,
        });

        if character.class == ClassKind::Mage && math::roll(MAGE_BURN_CHANCE, rng) {
            self.effects.push(StatusEffect {
                kind: EffectKind::Burn,
                target: EffectTarget::Enemy,
                remaining: BURN_DURATION,
                power: BURN_POWER,
            });
            events.push(CombatEvent::BurnInflicted {
                duration: BURN_DURATION,
                power: BURN_POWER,
            });
        }
        Ok(())
    }

    /// Ticks every active effect: duration down by one, burn damages the
    /// enemy, poison damages the character; spent effects are dropped after
    /// dealing their final tick.
    fn process_effects(&mut self, character: &mut Character, events: &mut Vec<CombatEvent>) {
        if self.effects.is_empty() {
            return;
        }
        let mut kept = Vec::with_capacity(self.effects.len());
        for mut effect in self.effects.drain(..) {
            effect.remaining -= 1;
            match (effect.kind, effect.target) {
                (EffectKind::Burn, EffectTarget::Enemy) => {
                    self.enemy.take_damage(effect.power);
                    events.push(CombatEvent::EffectTick {
                        kind: effect.kind,
                        target: effect.target,
                        damage: effect.power,
                    });
                }
                (EffectKind::Poison, EffectTarget::Character) => {
                    character.hp = character.hp.saturating_sub(effect.power);
                    events.push(CombatEvent::EffectTick {
                        kind: effect.kind,
                        target: effect.target,
                        damage: effect.power,
                    });
                }
                // No current action produces the other two combinations.
                _ => {}
            }
            if effect.remaining > 0 {
                kept.push(effect);
            } else {
                events.push(CombatEvent::EffectExpired {
                    kind: effect.kind,
                    target: effect.target,
                });
            }
        }
        self.effects = kept;
    }

    fn update_status(&mut self, character: &Character) {
        if self.status != EncounterStatus::Ongoing {
            return;
        }
        // Enemy checked first: if an effect tick fells both, the character wins.
        if !self.enemy.is_alive() {
            self.status = EncounterStatus::Victory;
        } else if character.hp == 0 {
            self.status = EncounterStatus::Defeat;
        }
    }

    /// Pays out a victory: the template's fixed xp and gold, a luck-driven
    /// drop roll, and quest progress for the defeated enemy. Returns `None`
    /// unless the encounter ended in victory, and on every call after the
    /// first, so rewards and quest counts are granted exactly once.
    pub fn award_rewards(
        &mut self,
        character: &mut Character,
        rng: &mut impl Rng,
    ) -> Option<BattleRewards> {
        if self.status != EncounterStatus::Victory || self.rewarded {
            return None;
        }
        self.rewarded = true;

        let level_ups = character.add_xp(self.enemy.xp);
        character.gold += self.enemy.gold;

        let luck = character.attribute(Attribute::Luck);
        let dropped_item = if math::roll(math::drop_chance(luck), rng) {
            let pool = if character.level >= RARE_DROP_MIN_LEVEL
                && math::roll(RARE_DROP_CHANCE, rng)
            {
                RARE_DROP_POOL
            } else {
                COMMON_DROP_POOL
            };
            let name = pool[rng.gen_range(0..pool.len())];
            character.inventory.add(name, 1);
            Some(name)
        } else {
            None
        };

        let quests = character.record_defeat(&self.enemy.name);
        debug!(enemy = %self.enemy.name, xp = self.enemy.xp, gold = self.enemy.gold, "victory");

        Some(BattleRewards {
            xp: self.enemy.xp,
            gold: self.enemy.gold,
            dropped_item,
            level_ups,
            quests,
        })
    }
}
