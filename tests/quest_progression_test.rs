//! Quest lifecycle: accept, progress on defeats, complete, pay out.

use skazka::catalog::{self, ClassKind};
use skazka::{Character, QuestError};

#[test]
fn test_multiple_quests_progress_independently() {
    let mut hero = Character::new("Иван", ClassKind::Archer);
    hero.accept_quest("q1").expect("goblins"); // 3× Гоблин
    hero.accept_quest("q2").expect("wolves"); // 4× Волк

    hero.record_defeat("Гоблин");
    hero.record_defeat("Волк");
    hero.record_defeat("Волк");

    assert_eq!(hero.quest_log.progress("q1", "Гоблин"), 1);
    assert_eq!(hero.quest_log.progress("q2", "Волк"), 2);
    assert!(!hero.quest_log.is_completed("q1"));
    assert!(!hero.quest_log.is_completed("q2"));
}

#[test]
fn test_untargeted_defeats_leave_all_counters_unchanged() {
    let mut hero = Character::new("Иван", ClassKind::Archer);
    hero.accept_quest("q1").expect("accept");
    hero.accept_quest("q2").expect("accept");
    hero.record_defeat("Гоблин");

    let before = hero.clone();
    let record = hero.record_defeat("Орк");
    assert!(record.updates.is_empty());
    assert!(record.completed.is_empty());
    assert_eq!(hero, before);
}

#[test]
fn test_completion_pays_xp_gold_and_items_exactly_once() {
    let mut hero = Character::new("Иван", ClassKind::Archer);
    hero.accept_quest("q4").expect("accept"); // 5× Скелет

    let xp_before = hero.xp;
    let gold_before = hero.gold;
    for defeat in 1..=5 {
        let record = hero.record_defeat("Скелет");
        if defeat < 5 {
            assert!(record.completed.is_empty());
        } else {
            assert_eq!(record.completed.len(), 1);
        }
    }

    let quest = catalog::quest("q4").expect("q4");
    assert_eq!(hero.xp, xp_before + quest.rewards.xp);
    assert_eq!(hero.gold, gold_before + quest.rewards.gold);
    assert_eq!(hero.inventory.count("Амулет удачи"), 1);
    assert!(hero.quest_log.is_completed("q4"));

    // Further skeletons change nothing for the finished quest
    let record = hero.record_defeat("Скелет");
    assert!(record.updates.is_empty());
    assert_eq!(hero.inventory.count("Амулет удачи"), 1);
}

#[test]
fn test_completed_quest_cannot_be_retaken_or_completed_again() {
    let mut hero = Character::new("Иван", ClassKind::Archer);
    hero.accept_quest("q3").expect("accept");
    hero.record_defeat("Тёмный маг");
    assert!(hero.quest_log.is_completed("q3"));

    assert_eq!(
        hero.accept_quest("q3"),
        Err(QuestError::AlreadyActiveOrCompleted("q3".to_string()))
    );
    assert_eq!(
        hero.complete_quest("q3"),
        Err(QuestError::NotActive("q3".to_string()))
    );
}

#[test]
fn test_quest_reward_xp_can_level_the_character() {
    let mut hero = Character::new("Маруся", ClassKind::Mage);
    hero.add_xp(99); // one xp short of level 2
    hero.accept_quest("q3").expect("accept"); // rewards 100 xp

    let record = hero.record_defeat("Тёмный маг");
    let completion = record.completed.first().expect("completed");
    assert!(!completion.level_ups.is_empty());
    assert_eq!(hero.level, 2);
}

#[test]
fn test_every_catalog_quest_is_playable_to_completion() {
    for quest in catalog::QUESTS {
        let mut hero = Character::new("Герой", ClassKind::Warrior);
        hero.accept_quest(quest.id).expect("accept");
        for _ in 0..quest.objective.count {
            hero.record_defeat(quest.objective.target);
        }
        assert!(
            hero.quest_log.is_completed(quest.id),
            "{} did not complete",
            quest.id
        );
        for item in quest.rewards.items {
            assert!(hero.inventory.count(item) >= 1);
        }
    }
}
