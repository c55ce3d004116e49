//! Headless balance simulator.
//!
//! Runs seeded encounter gauntlets for every class and prints survival and
//! progression statistics. No rendering, no input — this is tooling for
//! checking combat balance after tuning constants.
//!
//! Usage:
//!   cargo run --bin simulate -- [-n RUNS] [-e ENCOUNTERS] [--seed SEED]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

use skazka::catalog::{self, ClassKind};
use skazka::constants::SPECIAL_MANA_COST;
use skazka::session;
use skazka::{Character, CombatEngine, EncounterStatus, PlayerAction};

struct SimConfig {
    runs: u32,
    max_encounters: u32,
    seed: u64,
}

#[derive(Default)]
struct ClassReport {
    encounters: u64,
    victories: u64,
    deaths: u64,
    fled: u64,
    total_final_level: u64,
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig {
        runs: 200,
        max_encounters: 100,
        seed: 42,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.runs = value;
                }
                i += 2;
            }
            "-e" | "--encounters" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.max_encounters = value;
                }
                i += 2;
            }
            "--seed" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.seed = value;
                }
                i += 2;
            }
            other => {
                eprintln!("ignoring unknown argument: {}", other);
                i += 1;
            }
        }
    }
    config
}

/// Plays one gauntlet: fight random enemies until death or the encounter
/// cap, resting in the tavern when wounded and gold allows.
fn run_gauntlet(class: ClassKind, config: &SimConfig, rng: &mut StdRng, report: &mut ClassReport) {
    let mut hero = Character::new("Симулянт", class);
    for (item, _) in catalog::class_spec(class).starting_items {
        let is_equipment = catalog::item(item).map_or(false, |def| def.kind.is_equipment());
        if is_equipment {
            let _ = hero.equip(item);
        }
    }

    for _ in 0..config.max_encounters {
        if hero.hp < hero.max_hp / 2 {
            let _ = session::rest(&mut hero);
        }

        let template = &catalog::ENEMIES[rng.gen_range(0..catalog::ENEMIES.len())];
        let mut engine = CombatEngine::new(&hero, template);
        report.encounters += 1;

        let mut fled = false;
        while engine.status() == EncounterStatus::Ongoing {
            // Desperate and out of potions: try to run
            if hero.hp < hero.max_hp / 10 && hero.inventory.count("Зелье здоровья") == 0 {
                if session::roll_flee(rng) {
                    fled = true;
                    break;
                }
                engine.enemy_turn(&mut hero, rng);
                continue;
            }
            if hero.hp < hero.max_hp / 3 && hero.inventory.count("Зелье здоровья") > 0 {
                let _ = hero.use_consumable("Зелье здоровья");
                engine.enemy_turn(&mut hero, rng);
                continue;
            }

            let action = if hero.mp >= SPECIAL_MANA_COST {
                PlayerAction::Special
            } else {
                PlayerAction::Attack
            };
            if engine.player_turn(&mut hero, action, rng).is_err() {
                break;
            }
            if engine.status() == EncounterStatus::Ongoing {
                engine.enemy_turn(&mut hero, rng);
            }
        }

        match engine.status() {
            EncounterStatus::Victory => {
                report.victories += 1;
                engine.award_rewards(&mut hero, rng);
            }
            EncounterStatus::Defeat => {
                report.deaths += 1;
                report.total_final_level += u64::from(hero.level);
                return;
            }
            EncounterStatus::Ongoing => {
                if fled {
                    report.fled += 1;
                }
            }
        }
    }
    report.total_final_level += u64::from(hero.level);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("СИМУЛЯЦИЯ БОЁВ");
    println!("  runs/class:      {}", config.runs);
    println!("  max encounters:  {}", config.max_encounters);
    println!("  seed:            {}", config.seed);
    println!();
    println!(
        "{:<10} {:>10} {:>10} {:>8} {:>8} {:>10} {:>10}",
        "class", "encounters", "victories", "deaths", "fled", "win rate", "avg level"
    );

    for (index, class) in ClassKind::ALL.into_iter().enumerate() {
        let mut report = ClassReport::default();
        for run in 0..config.runs {
            let run_seed = config.seed
                ^ (u64::from(run) << 8)
                ^ ((index as u64) << 40);
            let mut rng = StdRng::seed_from_u64(run_seed);
            run_gauntlet(class, &config, &mut rng, &mut report);
        }

        let win_rate = if report.encounters > 0 {
            report.victories as f64 / report.encounters as f64 * 100.0
        } else {
            0.0
        };
        let avg_level = report.total_final_level as f64 / f64::from(config.runs.max(1));
        println!(
            "{:<10} {:>10} {:>10} {:>8} {:>8} {:>9.1}% {:>10.1}",
            class.display_name(),
            report.encounters,
            report.victories,
            report.deaths,
            report.fled,
            win_rate,
            avg_level
        );
    }
}
