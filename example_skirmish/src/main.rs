//! Example Skirmish - a complete battle driven without a UI
//!
//! This example shows:
//! - Building teams from the built-in scenario
//! - Driving the frame-based encounter sequencer with a fixed timestep
//! - Feeding it a synthetic animation clock (the job the TUI's tween does)
//! - Resolving the outcome into a report

use battle_core::{
    default_scenario, AnimationCommand, Encounter, EncounterEvent, LevelGapRule,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting example skirmish");

    let mut teams = match default_scenario().into_teams() {
        Ok(teams) => teams,
        Err(err) => {
            tracing::error!("scenario failed to build: {err}");
            return;
        }
    };

    let Some(attacker) = teams[0].withdraw("Runa") else {
        tracing::error!("Runa is missing from the roster");
        return;
    };
    let Some(defender) = teams[1].withdraw("Ketil") else {
        tracing::error!("Ketil is missing from the roster");
        return;
    };

    let mut encounter = match Encounter::new(attacker, defender, 1) {
        Ok(encounter) => encounter,
        Err(err) => {
            tracing::error!("encounter refused to start: {err}");
            return;
        }
    };

    // Seeded RNG so two runs of the example tell the same story.
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    // A synthetic attack tween: forward until the sequencer says reverse,
    // back to zero, restarted on demand. 16 ms frames, double speed.
    let dt = Duration::from_millis(16);
    let step = 32.0;
    let mut clock: f32 = 0.0;
    let mut reversed = false;

    for _ in 0..100_000 {
        let tick = match encounter.tick(dt, clock, &mut rng) {
            Ok(tick) => tick,
            Err(err) => {
                tracing::error!("tick failed: {err}");
                return;
            }
        };

        for event in &tick.events {
            match event {
                EncounterEvent::AttackResolved { report, .. } => {
                    println!("  {}", report.summary());
                }
                EncounterEvent::RoundAdvanced { round } => {
                    println!("------ round {round} ------");
                }
                EncounterEvent::BrokenWeaponNotice { unit, weapon, .. } => {
                    println!("  {unit}'s {weapon} is broken");
                }
            }
        }

        match tick.command {
            Some(AnimationCommand::Reverse) => reversed = true,
            Some(AnimationCommand::Begin(_)) => {
                clock = 0.0;
                reversed = false;
            }
            None => {}
        }

        if tick.done {
            break;
        }
        clock += if reversed { -step } else { step };
    }

    let (attacker_team, defender_team) = teams.split_at_mut(1);
    let report = match encounter.conclude(
        &mut attacker_team[0],
        &mut defender_team[0],
        &LevelGapRule::default(),
    ) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("conclude failed: {err}");
            return;
        }
    };

    println!();
    println!(
        "battle over after {} rounds and {} attacks",
        report.rounds, report.attacks_resolved
    );
    for fallen in &report.fallen {
        println!("  {} fell in battle", fallen.name);
    }
    for gain in &report.experience {
        if gain.levelled_up {
            println!(
                "  {} gains {} exp and reaches level {}",
                gain.unit, gain.points, gain.new_level
            );
        } else {
            println!("  {} gains {} exp", gain.unit, gain.points);
        }
    }
    for broken in &report.broken_weapons {
        println!("  {}'s {} is broken", broken.unit, broken.weapon);
    }
    match &report.winner {
        Some(team) => println!("  team {team} wins"),
        None => println!("  no winner yet"),
    }

    for team in &teams {
        println!();
        println!("{} roster:", team.name);
        for unit in team.units() {
            println!(
                "  {:12} HP {}/{}  Lv {}  Exp {}",
                unit.name, unit.health, unit.health_max, unit.level, unit.experience
            );
        }
    }
}
