//! Quest reference data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestObjective {
    /// Enemy name whose defeats count toward this quest.
    pub target: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestRewards {
    pub xp: u64,
    pub gold: u64,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub objective: QuestObjective,
    pub rewards: QuestRewards,
}

pub static QUESTS: &[QuestDef] = &[
    QuestDef {
        id: "q1",
        name: "Угроза гоблинов",
        description: "Победите 3 гоблинов, угрожающих деревне.",
        objective: QuestObjective {
            target: "Гоблин",
            count: 3,
        },
        rewards: QuestRewards {
            xp: 50,
            gold: 30,
            items: &["Зелье здоровья"],
        },
    },
    QuestDef {
        id: "q2",
        name: "Стая волков",
        description: "Очистите лес от стаи волков.",
        objective: QuestObjective {
            target: "Волк",
            count: 4,
        },
        rewards: QuestRewards {
            xp: 60,
            gold: 25,
            items: &["Кожаная броня"],
        },
    },
    QuestDef {
        id: "q3",
        name: "Тёмная магия",
        description: "Победите темного мага, который разрушает землю.",
        objective: QuestObjective {
            target: "Тёмный маг",
            count: 1,
        },
        rewards: QuestRewards {
            xp: 100,
            gold: 50,
            items: &["Магический посох"],
        },
    },
    QuestDef {
        id: "q4",
        name: "Древнее зло",
        description: "Исследуйте древние руины и победите скрытое зло.",
        objective: QuestObjective {
            target: "Скелет",
            count: 5,
        },
        rewards: QuestRewards {
            xp: 120,
            gold: 60,
            items: &["Амулет удачи"],
        },
    },
];

/// Looks up a quest by id ("q1".."q4").
pub fn quest(id: &str) -> Option<&'static QuestDef> {
    QUESTS.iter().find(|q| q.id == id)
}
