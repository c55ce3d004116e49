use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Item counts by name. Counts are strictly positive: an entry that reaches
/// zero is removed, and an absent entry reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    pub fn add(&mut self, name: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.items.entry(name.to_string()).or_insert(0) += amount;
    }

    /// Removes `amount` of `name`. Returns false (and changes nothing) if
    /// fewer than `amount` are held.
    pub fn remove(&mut self, name: &str, amount: u32) -> bool {
        match self.items.get_mut(name) {
            Some(count) if *count >= amount => {
                *count -= amount;
                if *count == 0 {
                    self.items.remove(name);
                }
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }
}
