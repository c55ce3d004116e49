use serde::{Deserialize, Serialize};

/// The five combat attributes a character (or item bonus) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Defense,
    Agility,
    Critical,
    Luck,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Defense,
        Attribute::Agility,
        Attribute::Critical,
        Attribute::Luck,
    ];

    /// Player-facing name, matching the game's language.
    pub fn display_name(self) -> &'static str {
        match self {
            Attribute::Strength => "Сила",
            Attribute::Defense => "Защита",
            Attribute::Agility => "Ловкость",
            Attribute::Critical => "Крит. шанс",
            Attribute::Luck => "Удача",
        }
    }
}

/// Base attribute block, before equipment bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAttributes {
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    pub critical: u32,
    pub luck: u32,
}

impl BaseAttributes {
    pub fn get(&self, attr: Attribute) -> u32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Defense => self.defense,
            Attribute::Agility => self.agility,
            Attribute::Critical => self.critical,
            Attribute::Luck => self.luck,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: u32) {
        match attr {
            Attribute::Strength => self.strength = value,
            Attribute::Defense => self.defense = value,
            Attribute::Agility => self.agility = value,
            Attribute::Critical => self.critical = value,
            Attribute::Luck => self.luck = value,
        }
    }
}
