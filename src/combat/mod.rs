//! Combat: a per-encounter state machine over a character and one scaled
//! enemy copy, with pure math split out for deterministic testing.

pub mod engine;
pub mod math;
pub mod types;

pub use engine::{CombatEngine, CombatError};
pub use types::{
    BattleRewards, CombatEvent, EffectKind, EffectTarget, Enemy, EncounterStatus, PlayerAction,
    StatusEffect, TurnReport,
};
