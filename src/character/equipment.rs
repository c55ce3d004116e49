use serde::{Deserialize, Serialize};

/// Equipment slots a character has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Weapon,
    Armor,
    Boots,
    Accessory,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Weapon, Slot::Armor, Slot::Boots, Slot::Accessory];

    pub fn display_name(self) -> &'static str {
        match self {
            Slot::Weapon => "Оружие",
            Slot::Armor => "Броня",
            Slot::Boots => "Обувь",
            Slot::Accessory => "Аксессуар",
        }
    }
}

/// Equipped items, referenced by catalog name. One item per slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub boots: Option<String>,
    pub accessory: Option<String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Weapon => self.weapon.as_deref(),
            Slot::Armor => self.armor.as_deref(),
            Slot::Boots => self.boots.as_deref(),
            Slot::Accessory => self.accessory.as_deref(),
        }
    }

    /// Puts `item` into `slot`, returning whatever was there before.
    pub fn set(&mut self, slot: Slot, item: Option<String>) -> Option<String> {
        let target = match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Armor => &mut self.armor,
            Slot::Boots => &mut self.boots,
            Slot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &str> {
        [&self.weapon, &self.armor, &self.boots, &self.accessory]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
    }

    pub fn is_equipped(&self, name: &str) -> bool {
        self.iter_equipped().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert_eq!(eq.iter_equipped().count(), 0);
        for slot in Slot::ALL {
            assert!(eq.get(slot).is_none());
        }
    }

    #[test]
    fn test_set_returns_previous() {
        let mut eq = Equipment::new();
        assert_eq!(eq.set(Slot::Weapon, Some("Железный меч".to_string())), None);
        let prev = eq.set(Slot::Weapon, Some("Стальной меч".to_string()));
        assert_eq!(prev.as_deref(), Some("Железный меч"));
        assert_eq!(eq.get(Slot::Weapon), Some("Стальной меч"));
    }

    #[test]
    fn test_is_equipped() {
        let mut eq = Equipment::new();
        eq.set(Slot::Boots, Some("Сапоги быстроты".to_string()));
        assert!(eq.is_equipped("Сапоги быстроты"));
        assert!(!eq.is_equipped("Железный меч"));
    }
}
