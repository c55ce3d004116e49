//! Save files: an explicit persisted record plus checksummed binary I/O.
//!
//! The on-disk envelope is `magic (8 bytes) | payload length (4) | bincode
//! payload | sha256 checksum (32)`. A bad magic, length, checksum or payload
//! is reported as a recoverable error — the session keeps running with its
//! in-memory state.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{self, ClassKind};
use crate::character::quest_log::TargetCounters;
use crate::character::{BaseAttributes, Character, Equipment, Inventory, QuestLog, Slot};
use crate::constants::SAVE_VERSION_MAGIC;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("save data is corrupt: {0}")]
    Corrupt(String),
    #[error("save encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}

/// The persisted character record.
///
/// Kept separate from the live `Character` so the wire shape is explicit:
/// quests are stored as ids plus raw counters and rehydrated against the
/// static catalog on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub name: String,
    pub class: ClassKind,
    pub level: u32,
    pub xp: u64,
    pub xp_next: u64,
    pub gold: u64,
    pub max_hp: u32,
    pub hp: u32,
    pub max_mp: u32,
    pub mp: u32,
    pub base: BaseAttributes,
    pub equipment: Equipment,
    pub inventory: BTreeMap<String, u32>,
    pub location: String,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
    /// quest id -> (target enemy name -> defeats)
    pub quest_progress: BTreeMap<String, TargetCounters>,
    /// Unix timestamp of the save.
    pub saved_at: i64,
}

impl SaveData {
    pub fn from_character(character: &Character, saved_at: i64) -> Self {
        let quest_progress = character
            .quest_log
            .active_ids()
            .map(|id| {
                let counters = character
                    .quest_log
                    .counters(id)
                    .cloned()
                    .unwrap_or_default();
                (id.to_string(), counters)
            })
            .collect();

        Self {
            name: character.name.clone(),
            class: character.class,
            level: character.level,
            xp: character.xp,
            xp_next: character.xp_next,
            gold: character.gold,
            max_hp: character.max_hp,
            hp: character.hp,
            max_mp: character.max_mp,
            mp: character.mp,
            base: character.base,
            equipment: character.equipment.clone(),
            inventory: character.inventory.iter().map(|(n, c)| (n.to_string(), c)).collect(),
            location: character.location.clone(),
            active_quests: character.quest_log.active_ids().map(String::from).collect(),
            completed_quests: character
                .quest_log
                .completed_ids()
                .map(String::from)
                .collect(),
            quest_progress,
            saved_at,
        }
    }

    /// Rebuilds a live character. Active quest ids unknown to the catalog
    /// are dropped silently (the rest of the record still loads), stray
    /// progress counters are discarded, and resource pools are clamped to
    /// their maxima.
    pub fn into_character(self) -> Character {
        let mut active: BTreeMap<String, TargetCounters> = BTreeMap::new();
        for id in self.active_quests {
            if catalog::quest(&id).is_none() {
                warn!(quest = %id, "dropping unknown quest id from save");
                continue;
            }
            let counters = self.quest_progress.get(&id).cloned().unwrap_or_default();
            active.insert(id, counters);
        }
        let completed: BTreeSet<String> = self.completed_quests.into_iter().collect();

        let mut equipment = self.equipment;
        for slot in Slot::ALL {
            if let Some(name) = equipment.get(slot).map(str::to_owned) {
                if catalog::item(&name).is_none() {
                    warn!(item = %name, "dropping unknown equipped item from save");
                    equipment.set(slot, None);
                }
            }
        }

        let mut inventory = Inventory::new();
        for (name, count) in self.inventory {
            inventory.add(&name, count);
        }

        Character {
            name: self.name,
            class: self.class,
            level: self.level,
            xp: self.xp,
            xp_next: self.xp_next,
            gold: self.gold,
            max_hp: self.max_hp,
            hp: self.hp.min(self.max_hp),
            max_mp: self.max_mp,
            mp: self.mp.min(self.max_mp),
            base: self.base,
            equipment,
            inventory,
            location: self.location,
            quest_log: QuestLog::from_parts(active, completed),
        }
    }
}

/// Reads and writes the save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Resolves the platform config directory and ensures it exists.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "skazka").ok_or_else(|| {
            SaveError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine config directory",
            ))
        })?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Uses an explicit file path; tests and tooling use this.
    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Stamps the record with the current time and writes it.
    pub fn save_character(&self, character: &Character) -> Result<(), SaveError> {
        let data = SaveData::from_character(character, chrono::Utc::now().timestamp());
        self.save(&data)
    }

    /// Loads the record and rehydrates it against the catalogs.
    pub fn load_character(&self) -> Result<Character, SaveError> {
        Ok(self.load()?.into_character())
    }

    pub fn save(&self, data: &SaveData) -> Result<(), SaveError> {
        let payload = bincode::serialize(data)?;
        let payload_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&payload_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;

        info!(path = %self.save_path.display(), bytes = payload_len, "saved");
        Ok(())
    }

    pub fn load(&self) -> Result<SaveData, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != SAVE_VERSION_MAGIC {
            return Err(SaveError::Corrupt(format!(
                "bad magic: expected 0x{:016X}, got 0x{:016X}",
                SAVE_VERSION_MAGIC, magic
            )));
        }

        let mut len_bytes = [0u8; 4];
        file.read_exact(&mut len_bytes)?;
        let payload_len = u32::from_le_bytes(len_bytes);

        let mut payload = vec![0u8; payload_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(len_bytes);
        hasher.update(&payload);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::Corrupt("checksum mismatch".to_string()));
        }

        let data = bincode::deserialize(&payload)?;
        info!(path = %self.save_path.display(), "loaded");
        Ok(data)
    }
}
