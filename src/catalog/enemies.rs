//! Enemy templates.
//!
//! Templates are never mutated; combat works on a level-scaled copy made at
//! encounter start.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDef {
    pub name: &'static str,
    pub hp: u32,
    pub strength: u32,
    pub defense: u32,
    pub agility: u32,
    /// Fixed experience reward for defeating this enemy.
    pub xp: u64,
    /// Fixed gold reward for defeating this enemy.
    pub gold: u64,
    pub description: &'static str,
    /// Flavor line shown when the enemy attacks.
    pub attack_line: &'static str,
}

pub static ENEMIES: &[EnemyDef] = &[
    EnemyDef {
        name: "Гоблин",
        hp: 50,
        strength: 5,
        defense: 3,
        agility: 7,
        xp: 20,
        gold: 10,
        description: "Мелкий зеленокожий враг с острыми зубами",
        attack_line: "скалит зубы и замахивается дубиной",
    },
    EnemyDef {
        name: "Волк",
        hp: 40,
        strength: 6,
        defense: 2,
        agility: 9,
        xp: 15,
        gold: 5,
        description: "Серый хищник с острыми клыками",
        attack_line: "щелкает челюстями и рычит",
    },
    EnemyDef {
        name: "Орк",
        hp: 80,
        strength: 8,
        defense: 5,
        agility: 4,
        xp: 30,
        gold: 15,
        description: "Массивное зеленое создание с боевым топором",
        attack_line: "издает боевой клич и атакует",
    },
    EnemyDef {
        name: "Скелет",
        hp: 60,
        strength: 6,
        defense: 4,
        agility: 6,
        xp: 25,
        gold: 12,
        description: "Оживлённые кости мертвеца с ржавым мечом",
        attack_line: "лязгает костями и атакует",
    },
    EnemyDef {
        name: "Тролль",
        hp: 120,
        strength: 12,
        defense: 8,
        agility: 2,
        xp: 45,
        gold: 25,
        description: "Огромное и сильное чудовище с дубиной",
        attack_line: "ревет и наносит сокрушительный удар",
    },
    EnemyDef {
        name: "Тёмный маг",
        hp: 70,
        strength: 5,
        defense: 3,
        agility: 7,
        xp: 40,
        gold: 30,
        description: "Колдун в черной мантии с магическим посохом",
        attack_line: "произносит заклинание и атакует темной магией",
    },
];

/// Looks up an enemy template by its exact name.
pub fn enemy(name: &str) -> Option<&'static EnemyDef> {
    ENEMIES.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_lookup() {
        let goblin = enemy("Гоблин").expect("goblin exists");
        assert_eq!(goblin.hp, 50);
        assert_eq!(goblin.xp, 20);
        assert!(enemy("Дракон").is_none());
    }

    #[test]
    fn test_enemy_names_are_unique() {
        for (i, a) in ENEMIES.iter().enumerate() {
            for b in &ENEMIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_rewards_are_positive() {
        for def in ENEMIES {
            assert!(def.xp > 0, "{} grants no xp", def.name);
            assert!(def.gold > 0, "{} grants no gold", def.name);
            assert!(def.hp > 0);
        }
    }
}
