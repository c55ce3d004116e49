//! Skazka — turn-based text RPG core.
//!
//! The crate holds the game's logic and data: static catalogs, the
//! character model, the per-encounter combat engine, session policies and
//! checksummed save files. Rendering, input and menu flow are a caller's
//! concern; everything here communicates through operations and data
//! events, and every random outcome draws from an injected RNG so it can
//! be reproduced under test.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod constants;
pub mod save_manager;
pub mod session;

pub use catalog::ClassKind;
pub use character::{Character, ItemError, QuestError};
pub use combat::{CombatEngine, CombatError, EncounterStatus, PlayerAction};
pub use save_manager::{SaveData, SaveError, SaveManager};
pub use session::SessionError;
