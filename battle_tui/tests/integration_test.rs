//! Integration test: Build scenario -> Fight encounter -> Resolve outcome
//!
//! This test validates the full flow from scenario loading through the
//! frame-driven sequencer to the final report, driving the animation clock
//! with synthetic frames the way the TUI does with real ones.

use battle_core::{
    default_scenario, AnimationCommand, Encounter, EncounterEvent, LevelGapRule, Side, Team, Unit,
    UnitStats, Weapon, WeaponKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Drive an encounter to completion with a synthetic tween clock at 50 ms
/// per frame, returning every event the sequencer emitted.
fn run_encounter(encounter: &mut Encounter, rng: &mut StdRng) -> Vec<EncounterEvent> {
    let mut clock: f32 = 0.0;
    let mut reversed = false;
    let mut events = Vec::new();
    let dt = Duration::from_millis(50);

    for _ in 0..100_000 {
        let tick = encounter.tick(dt, clock, rng).expect("tick failed");
        events.extend(tick.events);
        match tick.command {
            Some(AnimationCommand::Reverse) => reversed = true,
            Some(AnimationCommand::Begin(_)) => {
                clock = 0.0;
                reversed = false;
            }
            None => {}
        }
        if tick.done {
            return events;
        }
        clock += if reversed { -50.0 } else { 50.0 };
    }
    panic!("encounter did not terminate in bounded time");
}

fn make_unit(name: &str, strength: u32, speed: u32, health_max: u32, weapon_uses: u32) -> Unit {
    let mut unit = Unit::new(
        name,
        UnitStats {
            health_max,
            health: None,
            level: 1,
            experience: 0,
            strength,
            skill: 50, // certain hits
            speed,
            luck: 0,
            defence: 2,
            resistance: 1,
            movement: 5,
            constitution: 7,
            aid: 6,
            affinity: None,
            condition: None,
            proficiency: Default::default(),
        },
    )
    .expect("valid unit");
    unit.give_weapon(
        Weapon::new("Iron Sword", WeaponKind::Sword, 3, 0, 1, weapon_uses),
        true,
    );
    unit
}

#[test]
fn test_default_scenario_battle_resolves() {
    separator("Default scenario: Runa vs Sigrid");

    let mut teams = default_scenario().into_teams().expect("scenario builds");
    assert_eq!(teams.len(), 2);

    let runa = teams[0].withdraw("Runa").expect("Runa on roster");
    let sigrid = teams[1].withdraw("Sigrid").expect("Sigrid on roster");
    println!("{}: \n{}", runa.name, runa);
    println!("{}: \n{}", sigrid.name, sigrid);

    let mut encounter = Encounter::new(runa, sigrid, 1).expect("encounter starts");
    let mut rng = StdRng::seed_from_u64(99);
    let events = run_encounter(&mut encounter, &mut rng);

    // equal speed, both in range, hit chances above 100: exactly one
    // certain hit each, round counter ends at 2
    let resolutions: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            EncounterEvent::AttackResolved { side, report } => Some((*side, report.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(resolutions.len(), 2);
    assert_eq!(resolutions[0].0, Side::Attacker);
    assert_eq!(resolutions[1].0, Side::Defender);
    assert!(resolutions.iter().all(|(_, report)| report.connected()));
    assert_eq!(encounter.round(), 2);

    let (attacker_team, defender_team) = teams.split_at_mut(1);
    let report = encounter
        .conclude(
            &mut attacker_team[0],
            &mut defender_team[0],
            &LevelGapRule::default(),
        )
        .expect("conclude after done");

    println!("report: rounds={} attacks={}", report.rounds, report.attacks_resolved);
    assert!(report.fallen.is_empty());
    assert_eq!(report.winner, None);
    assert_eq!(report.experience.len(), 2);
    assert!(teams[0].is_mine("Runa"));
    assert!(teams[1].is_mine("Sigrid"));
    assert!(teams[0].find("Runa").expect("back home").played);
}

#[test]
fn test_lethal_battle_reports_death_and_winner() {
    separator("Lethal battle");

    let bruiser = make_unit("Bruiser", 40, 5, 30, 40);
    let victim = make_unit("Victim", 6, 5, 10, 40);
    let mut reds = Team::new("Reds", (255, 0, 0), vec![bruiser]).expect("team");
    let mut blues = Team::new("Blues", (0, 0, 255), vec![victim]).expect("team");

    let bruiser = reds.withdraw("Bruiser").expect("on roster");
    let victim = blues.withdraw("Victim").expect("on roster");
    let mut encounter = Encounter::new(bruiser, victim, 1).expect("encounter starts");
    let mut rng = StdRng::seed_from_u64(7);
    let events = run_encounter(&mut encounter, &mut rng);

    // the first hit kills; the victim's allocated attack is discarded
    let resolutions = events
        .iter()
        .filter(|event| matches!(event, EncounterEvent::AttackResolved { .. }))
        .count();
    assert_eq!(resolutions, 1);

    let report = encounter
        .conclude(&mut reds, &mut blues, &LevelGapRule::default())
        .expect("conclude");

    assert_eq!(report.fallen.len(), 1);
    assert_eq!(report.fallen[0].name, "Victim");
    assert_eq!(report.fallen[0].health, 0);
    assert!(blues.is_defeated());
    assert_eq!(report.winner.as_deref(), Some("Reds"));
    println!("winner: {:?}", report.winner);
}

#[test]
fn test_weapon_break_surfaces_in_events_and_report() {
    separator("Weapon break");

    let mut swordbreaker = make_unit("Swordbreaker", 6, 5, 40, 1);
    swordbreaker.items.clear();
    swordbreaker.give_weapon(Weapon::new("Brittle Sword", WeaponKind::Sword, 3, 0, 1, 1), true);
    let sparring = make_unit("Sparring", 4, 5, 40, 40);

    let mut reds = Team::new("Reds", (255, 0, 0), vec![swordbreaker]).expect("team");
    let mut blues = Team::new("Blues", (0, 0, 255), vec![sparring]).expect("team");
    let swordbreaker = reds.withdraw("Swordbreaker").expect("on roster");
    let sparring = blues.withdraw("Sparring").expect("on roster");

    let mut encounter = Encounter::new(swordbreaker, sparring, 1).expect("encounter starts");
    let mut rng = StdRng::seed_from_u64(3);
    let events = run_encounter(&mut encounter, &mut rng);

    let notices = events
        .iter()
        .filter(|event| matches!(event, EncounterEvent::BrokenWeaponNotice { .. }))
        .count();
    assert_eq!(notices, 1);

    let report = encounter
        .conclude(&mut reds, &mut blues, &LevelGapRule::default())
        .expect("conclude");
    assert_eq!(report.broken_weapons.len(), 1);
    assert_eq!(report.broken_weapons[0].unit, "Swordbreaker");
    assert_eq!(report.broken_weapons[0].weapon, "Brittle Sword");

    // the weapon is still carried, just spent
    let owner = reds.find("Swordbreaker").expect("back home");
    assert_eq!(owner.active_weapon().expect("still carried").uses, 0);
    assert_eq!(owner.weapon_range(), 1);
}
