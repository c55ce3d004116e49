// Leveling
pub const MAX_LEVEL: u32 = 20;
pub const XP_THRESHOLD: u64 = 100;
pub const STARTING_GOLD: u64 = 50;

// Basic attack
pub const ATTACK_STRENGTH_FACTOR: f64 = 2.0;
pub const ATTACK_DEFENSE_DIVISOR: f64 = 2.0;
pub const ATTACK_JITTER: (f64, f64) = (0.8, 1.2);
pub const CRIT_CHANCE_CAP: f64 = 0.5;
pub const CRIT_DAMAGE_MULTIPLIER: f64 = 1.8;
pub const DODGE_CHANCE_CAP: f64 = 0.3;
pub const DODGE_AGILITY_DIVISOR: f64 = 30.0;

// Enemy attack
pub const ENEMY_STRENGTH_FACTOR: f64 = 1.5;
pub const ENEMY_DEFENSE_DIVISOR: f64 = 2.0;
pub const ENEMY_JITTER: (f64, f64) = (0.8, 1.2);
pub const MISS_CHANCE_CAP: f64 = 0.2;
pub const MISS_AGILITY_DIVISOR: f64 = 40.0;

// Luck scales dodge/miss/drop odds; 100 luck doubles (or cancels) them
pub const LUCK_PERCENT_DIVISOR: f64 = 100.0;

// Special attacks
pub const SPECIAL_MANA_COST: u32 = 10;
pub const ARCHER_SPECIAL_CRIT_CAP: f64 = 0.7;
pub const ARCHER_SPECIAL_CRIT_DIVISOR: f64 = 20.0;
pub const ARCHER_SPECIAL_CRIT_MULTIPLIER: f64 = 1.5;
pub const MAGE_BURN_CHANCE: f64 = 0.3;
pub const BURN_DURATION: u32 = 3;
pub const BURN_POWER: u32 = 5;

// Enemy level scaling: f = 1 + (level - 1) * STEP
pub const ENEMY_LEVEL_SCALE_STEP: f64 = 0.2;

// Item drops after a victory
pub const ITEM_DROP_BASE_CHANCE: f64 = 0.3;
pub const ITEM_DROP_LUCK_DIVISOR: f64 = 200.0;
pub const ITEM_DROP_LUCK_BONUS_CAP: f64 = 0.1;
pub const RARE_DROP_MIN_LEVEL: u32 = 3;
pub const RARE_DROP_CHANCE: f64 = 0.3;

// Session policy
pub const FLEE_SUCCESS_CHANCE: f64 = 0.5;
pub const TRAVEL_AMBUSH_CHANCE: f64 = 0.4;
pub const EXPLORE_FIND_CHANCE: f64 = 0.4;
pub const EXPLORE_POTION_SHARE: f64 = 0.7;
pub const EXPLORE_GOLD_MIN: u64 = 5;
pub const EXPLORE_GOLD_MAX: u64 = 20;
pub const REST_COST: u64 = 10;
pub const SELL_PRICE_DIVISOR: u64 = 2;
pub const REVIVE_HP: u32 = 1;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x534B_415A_4B41_0001;
