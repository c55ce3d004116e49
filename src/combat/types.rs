use crate::catalog::EnemyDef;
use crate::character::{DefeatRecord, LevelUp};
use crate::constants::ENEMY_LEVEL_SCALE_STEP;

/// What the player chose to do this turn. Fleeing is not resolved by the
/// engine; it is a session-level branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterStatus {
    Ongoing,
    /// The enemy is down.
    Victory,
    /// The character is down. Recovery (reviving, relocation) is a session
    /// policy, not the engine's.
    Defeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Burn,
    Poison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTarget {
    Character,
    Enemy,
}

/// A timed hp modifier ticking once per action until its duration runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEffect {
    pub kind: EffectKind,
    pub target: EffectTarget,
    pub remaining: u32,
    pub power: u32,
}

/// A per-encounter enemy: a level-scaled copy of a catalog template,
/// owned exclusively by one combat engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    pub xp: u64,
    pub gold: u64,
}

impl Enemy {
    /// Clones a template, scaling hp/strength/defense by
    /// `1 + (level - 1) * 0.2` (truncated). Agility is never scaled.
    pub fn scaled(template: &EnemyDef, character_level: u32) -> Self {
        let factor = 1.0 + f64::from(character_level.saturating_sub(1)) * ENEMY_LEVEL_SCALE_STEP;
        let scale = |stat: u32| (f64::from(stat) * factor) as u32;
        let hp = scale(template.hp);
        Self {
            name: template.name.to_string(),
            max_hp: hp,
            hp,
            strength: scale(template.strength),
            defense: scale(template.defense),
            agility: template.agility,
            xp: template.xp,
            gold: template.gold,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// One combat occurrence, carried as data for the session to render.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// The basic attack landed.
    PlayerAttack { damage: u32, crit: bool },
    /// The enemy dodged the basic attack.
    EnemyDodged,
    /// A class special attack landed.
    SpecialAttack {
        name: &'static str,
        damage: u32,
        crit: bool,
    },
    /// The mage's fireball set the enemy on fire.
    BurnInflicted { duration: u32, power: u32 },
    /// The enemy hit the character.
    EnemyAttack { damage: u32 },
    /// The enemy's attack missed.
    EnemyMissed,
    /// A status effect dealt its per-turn damage.
    EffectTick {
        kind: EffectKind,
        target: EffectTarget,
        damage: u32,
    },
    /// A status effect ran out.
    EffectExpired { kind: EffectKind, target: EffectTarget },
}

/// Outcome of one engine call: what happened plus the updated status.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub events: Vec<CombatEvent>,
    pub status: EncounterStatus,
}

/// Spoils of a won encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleRewards {
    pub xp: u64,
    pub gold: u64,
    /// Item added to the inventory by the drop roll, if any.
    pub dropped_item: Option<&'static str>,
    pub level_ups: Vec<LevelUp>,
    pub quests: DefeatRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_scaling_is_identity_at_level_one() {
        let template = catalog::enemy("Гоблин").expect("goblin");
        let enemy = Enemy::scaled(template, 1);
        assert_eq!(enemy.hp, 50);
        assert_eq!(enemy.strength, 5);
        assert_eq!(enemy.defense, 3);
        assert_eq!(enemy.agility, 7);
    }

    #[test]
    fn test_scaling_doubles_at_level_six() {
        let template = catalog::enemy("Гоблин").expect("goblin");
        let enemy = Enemy::scaled(template, 6);
        assert_eq!(enemy.hp, 100);
        assert_eq!(enemy.strength, 10);
        assert_eq!(enemy.defense, 6);
        // Agility stays on the template value
        assert_eq!(enemy.agility, 7);
    }

    #[test]
    fn test_scaling_truncates_toward_zero() {
        let template = catalog::enemy("Скелет").expect("skeleton");
        // Level 2 factor 1.2: 60 -> 72, 6 -> 7.2 -> 7, 4 -> 4.8 -> 4
        let enemy = Enemy::scaled(template, 2);
        assert_eq!(enemy.hp, 72);
        assert_eq!(enemy.strength, 7);
        assert_eq!(enemy.defense, 4);
    }

    #[test]
    fn test_take_damage_saturates() {
        let template = catalog::enemy("Волк").expect("wolf");
        let mut enemy = Enemy::scaled(template, 1);
        enemy.take_damage(1_000);
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_template_is_never_mutated() {
        let template = catalog::enemy("Тролль").expect("troll");
        let mut enemy = Enemy::scaled(template, 5);
        enemy.take_damage(enemy.hp);
        assert_eq!(catalog::enemy("Тролль").expect("troll").hp, 120);
    }
}
