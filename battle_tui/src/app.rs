//! Application state

use crate::tween::Tween;
use battle_core::{
    config::load_toml, default_scenario, BattleConstants, ConfigError, Encounter, EncounterEvent,
    EncounterReport, LevelGapRule, ScenarioConfig, Side, Team,
};
use battle_core::encounter::AnimationCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Duration;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Roster,
    Battle,
    Report,
}

pub struct App {
    pub screen: Screen,
    pub teams: Vec<Team>,
    pub encounter: Option<Encounter>,
    pub tween: Tween,
    /// Which side's unit is currently lunging
    pub animating: Side,
    pub constants: BattleConstants,
    pub log: Vec<String>,
    pub log_scroll: usize,
    pub report: Option<EncounterReport>,
    pub status: Option<String>,
    rng: StdRng,
}

impl App {
    /// Build the app. A `scenario.toml` in the working directory overrides
    /// the built-in skirmish.
    pub fn new() -> Result<Self, ConfigError> {
        let scenario: ScenarioConfig = match load_toml(Path::new("scenario.toml")) {
            Ok(scenario) => scenario,
            Err(ConfigError::IoError(_)) => default_scenario(),
            Err(err) => return Err(err),
        };
        let teams = scenario.into_teams()?;
        Ok(App {
            screen: Screen::Roster,
            teams,
            encounter: None,
            // the tween runs at double speed so a swing takes half a second
            tween: Tween::new(2.0),
            animating: Side::Attacker,
            constants: BattleConstants::default(),
            log: Vec::new(),
            log_scroll: 0,
            report: None,
            status: None,
            rng: StdRng::from_entropy(),
        })
    }

    /// Send the first unit of each team into battle at distance 1.
    pub fn start_battle(&mut self) {
        if self.screen == Screen::Battle {
            return;
        }
        if self.teams.len() < 2 {
            self.status = Some("need two teams to battle".to_string());
            return;
        }
        let attacker_name = match self.teams[0].units().first() {
            Some(unit) if !unit.is_dead() => unit.name.clone(),
            _ => {
                self.status = Some(format!("{} has no one to send", self.teams[0].name));
                return;
            }
        };
        let defender_name = match self.teams[1].units().first() {
            Some(unit) if !unit.is_dead() => unit.name.clone(),
            _ => {
                self.status = Some(format!("{} has no one to send", self.teams[1].name));
                return;
            }
        };
        let Some(attacker) = self.teams[0].withdraw(&attacker_name) else {
            return;
        };
        let Some(defender) = self.teams[1].withdraw(&defender_name) else {
            return;
        };

        self.log.clear();
        self.log_scroll = 0;
        self.log
            .push(format!("#### {} vs {} ####", attacker.name, defender.name));

        match Encounter::with_constants(attacker, defender, 1, self.constants.clone()) {
            Ok(encounter) => {
                self.encounter = Some(encounter);
                self.animating = Side::Attacker;
                self.tween.begin();
                self.report = None;
                self.status = None;
                self.screen = Screen::Battle;
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }

    /// One frame: advance the tween, tick the sequencer, apply its
    /// animation commands, and log its events.
    pub fn tick(&mut self, dt: Duration) {
        if self.screen != Screen::Battle {
            return;
        }
        self.tween.advance(dt);
        let Some(encounter) = self.encounter.as_mut() else {
            return;
        };
        match encounter.tick(dt, self.tween.clock_ms(), &mut self.rng) {
            Ok(tick) => {
                match tick.command {
                    Some(AnimationCommand::Reverse) => self.tween.reverse(),
                    Some(AnimationCommand::Begin(side)) => {
                        self.animating = side;
                        self.tween.begin();
                    }
                    None => {}
                }
                for event in &tick.events {
                    self.log.push(describe(event));
                }
                if tick.done {
                    self.tween.stop();
                    self.finish_battle();
                }
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }

    fn finish_battle(&mut self) {
        let Some(encounter) = self.encounter.take() else {
            return;
        };
        let (attacker_side, defender_side) = self.teams.split_at_mut(1);
        match encounter.conclude(
            &mut attacker_side[0],
            &mut defender_side[0],
            &LevelGapRule::default(),
        ) {
            Ok(report) => {
                for fallen in &report.fallen {
                    self.log.push(format!("{} fell in battle", fallen.name));
                }
                for gain in &report.experience {
                    if gain.levelled_up {
                        self.log.push(format!(
                            "{} gains {} exp and reaches level {}",
                            gain.unit, gain.points, gain.new_level
                        ));
                    } else {
                        self.log.push(format!("{} gains {} exp", gain.unit, gain.points));
                    }
                }
                if let Some(team) = &report.winner {
                    self.log.push(format!("team {team} wins"));
                }
                self.report = Some(report);
                self.screen = Screen::Report;
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }

    /// Export the last report as JSON next to the binary.
    pub fn save_report(&mut self) {
        let Some(report) = &self.report else {
            self.status = Some("no report to save".to_string());
            return;
        };
        match serde_json::to_string_pretty(report) {
            Ok(json) => match std::fs::write("battle_report.json", json) {
                Ok(()) => self.status = Some("saved battle_report.json".to_string()),
                Err(err) => self.status = Some(err.to_string()),
            },
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    /// Leave the report screen and show the rosters again.
    pub fn back_to_roster(&mut self) {
        if self.screen == Screen::Report {
            self.screen = Screen::Roster;
        }
    }

    /// Scroll the log back in history
    pub fn on_up(&mut self) {
        if self.log_scroll + 1 < self.log.len() {
            self.log_scroll += 1;
        }
    }

    /// Scroll the log toward the tail
    pub fn on_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }
}

/// Render a sequencer event as a log line
fn describe(event: &EncounterEvent) -> String {
    match event {
        EncounterEvent::AttackResolved { report, .. } => report.summary(),
        EncounterEvent::RoundAdvanced { round } => format!("------ round {round} ------"),
        EncounterEvent::BrokenWeaponNotice { unit, weapon, .. } => {
            format!("{unit}'s {weapon} is broken")
        }
    }
}
