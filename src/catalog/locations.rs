//! World locations.

/// Name of the location every new character starts in, and the only one
/// with a shop, a tavern and a quest board.
pub const STARTING_LOCATION: &str = "Деревня";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Enemies that can be encountered here.
    pub enemies: &'static [&'static str],
    /// Chance of running into an enemy while exploring.
    pub encounter_chance: f64,
}

pub static LOCATIONS: &[LocationDef] = &[
    LocationDef {
        name: "Деревня",
        description: "Мирная деревня с несколькими магазинами.",
        enemies: &["Гоблин"],
        encounter_chance: 0.2,
    },
    LocationDef {
        name: "Лес",
        description: "Густой лес с различной живностью.",
        enemies: &["Волк", "Гоблин"],
        encounter_chance: 0.4,
    },
    LocationDef {
        name: "Горный перевал",
        description: "Опасный горный путь.",
        enemies: &["Орк", "Тролль"],
        encounter_chance: 0.5,
    },
    LocationDef {
        name: "Древние руины",
        description: "Остатки древней цивилизации.",
        enemies: &["Скелет", "Тёмный маг"],
        encounter_chance: 0.6,
    },
];

/// Looks up a location by its exact name.
pub fn location(name: &str) -> Option<&'static LocationDef> {
    LOCATIONS.iter().find(|l| l.name == name)
}
