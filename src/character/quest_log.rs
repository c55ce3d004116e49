use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog;

/// Per-quest defeat counters, keyed by target enemy name.
pub type TargetCounters = BTreeMap<String, u32>;

/// Active and completed quests with per-target progress counters.
///
/// Only bookkeeping lives here; reward issuance is the character's job
/// because it touches xp, gold and the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestLog {
    active: BTreeMap<String, TargetCounters>,
    completed: BTreeSet<String>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Adds a quest to the active set with zeroed progress.
    /// The caller has already validated the id against the catalog.
    pub fn activate(&mut self, id: &str) {
        self.active.insert(id.to_string(), TargetCounters::new());
    }

    /// Progress toward `target` for quest `id`; absent counters read as zero.
    pub fn progress(&self, id: &str, target: &str) -> u32 {
        self.active
            .get(id)
            .and_then(|counters| counters.get(target))
            .copied()
            .unwrap_or(0)
    }

    /// Increments the counter of every active quest whose objective targets
    /// `enemy_name`. Returns `(quest id, new count)` per affected quest.
    /// A no-op when no active quest targets that enemy.
    pub fn record_defeat(&mut self, enemy_name: &str) -> Vec<(String, u32)> {
        let mut updated = Vec::new();
        for (id, counters) in &mut self.active {
            let Some(def) = catalog::quest(id) else {
                continue;
            };
            if def.objective.target != enemy_name {
                continue;
            }
            let count = counters.entry(enemy_name.to_string()).or_insert(0);
            *count += 1;
            updated.push((id.clone(), *count));
        }
        updated
    }

    /// Moves a quest from active to completed, dropping its counters.
    /// Returns false if the quest was not active.
    pub fn finish(&mut self, id: &str) -> bool {
        if self.active.remove(id).is_none() {
            return false;
        }
        self.completed.insert(id.to_string());
        true
    }

    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.active.keys().map(String::as_str)
    }

    pub fn completed_ids(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    pub fn counters(&self, id: &str) -> Option<&TargetCounters> {
        self.active.get(id)
    }

    /// Rebuilds a log from persisted parts; used by the save layer.
    pub fn from_parts(
        active: BTreeMap<String, TargetCounters>,
        completed: BTreeSet<String>,
    ) -> Self {
        Self { active, completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defeat_untargeted_enemy_is_noop() {
        let mut log = QuestLog::new();
        log.activate("q1"); // targets Гоблин
        let updates = log.record_defeat("Тролль");
        assert!(updates.is_empty());
        assert_eq!(log.progress("q1", "Гоблин"), 0);
    }

    #[test]
    fn test_record_defeat_increments_matching_quests() {
        let mut log = QuestLog::new();
        log.activate("q1");
        let updates = log.record_defeat("Гоблин");
        assert_eq!(updates, vec![("q1".to_string(), 1)]);
        assert_eq!(log.progress("q1", "Гоблин"), 1);
    }

    #[test]
    fn test_finish_moves_to_completed() {
        let mut log = QuestLog::new();
        log.activate("q2");
        assert!(log.finish("q2"));
        assert!(!log.is_active("q2"));
        assert!(log.is_completed("q2"));
        assert!(!log.finish("q2"));
    }

    #[test]
    fn test_progress_defaults_to_zero_without_vivifying() {
        let mut log = QuestLog::new();
        log.activate("q1");
        assert_eq!(log.progress("q1", "Гоблин"), 0);
        assert!(log.counters("q1").expect("active").is_empty());
        assert_eq!(log.progress("q9", "Гоблин"), 0);
    }
}
