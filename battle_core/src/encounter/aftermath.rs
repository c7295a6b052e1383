//! Post-encounter resolution: deaths, experience, winner, broken weapons

use super::{index, Encounter, EncounterError, Phase};
use crate::experience::ExperienceRule;
use crate::types::Side;
use crate::unit::{Team, Unit};
use serde::{Deserialize, Serialize};

/// Experience granted to a surviving participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceGain {
    pub unit: String,
    pub points: u32,
    pub new_level: u32,
    pub levelled_up: bool,
}

/// A weapon that was spent during the encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokenWeapon {
    pub unit: String,
    pub weapon: String,
}

/// Everything that came out of one finished encounter.
///
/// The units that died are carried here by value; survivors went back to
/// their teams.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncounterReport {
    pub rounds: u32,
    pub attacks_resolved: u32,
    pub fallen: Vec<Unit>,
    pub experience: Vec<ExperienceGain>,
    pub broken_weapons: Vec<BrokenWeapon>,
    /// The team left standing, if exactly one side's team is now defeated
    pub winner: Option<String>,
}

impl Encounter {
    /// Resolve the outcome of a finished encounter.
    ///
    /// Consumes the sequencer, so resolution runs at most once. Survivors
    /// are redeployed to the teams they were withdrawn from; the fallen
    /// are reported instead of returned. Returns
    /// [`EncounterError::InProgress`] if the sequencer has not reached its
    /// terminal phase.
    pub fn conclude(
        self,
        attacker_team: &mut Team,
        defender_team: &mut Team,
        rule: &impl ExperienceRule,
    ) -> Result<EncounterReport, EncounterError> {
        if !matches!(self.phase, Phase::Done) {
            return Err(EncounterError::InProgress);
        }

        let Encounter {
            mut attacker,
            mut defender,
            round,
            attacks_resolved,
            broke,
            ..
        } = self;

        // Turn economy: the initiating unit has acted, win or lose.
        attacker.played = true;

        let broken_weapons = [(&attacker, Side::Attacker), (&defender, Side::Defender)]
            .into_iter()
            .filter(|(_, side)| broke[index(*side)])
            .filter_map(|(unit, _)| {
                unit.active_weapon().map(|weapon| BrokenWeapon {
                    unit: unit.name.clone(),
                    weapon: weapon.name.clone(),
                })
            })
            .collect();

        // Experience is computed against the opponent as the battle left
        // it, before either unit moves on.
        let attacker_points = (!attacker.is_dead()).then(|| rule.points(&attacker, &defender));
        let defender_points = (!defender.is_dead()).then(|| rule.points(&defender, &attacker));

        let mut fallen = Vec::new();
        let mut experience = Vec::new();

        if let Some(points) = attacker_points {
            let levelled_up = attacker.gain_exp(points);
            experience.push(ExperienceGain {
                unit: attacker.name.clone(),
                points,
                new_level: attacker.level,
                levelled_up,
            });
            attacker_team.deploy(attacker)?;
        } else {
            tracing::info!("{} fell in battle", attacker.name);
            fallen.push(attacker);
        }

        if let Some(points) = defender_points {
            let levelled_up = defender.gain_exp(points);
            experience.push(ExperienceGain {
                unit: defender.name.clone(),
                points,
                new_level: defender.level,
                levelled_up,
            });
            defender_team.deploy(defender)?;
        } else {
            tracing::info!("{} fell in battle", defender.name);
            fallen.push(defender);
        }

        let winner = if defender_team.is_defeated() && !attacker_team.is_defeated() {
            Some(attacker_team.name.clone())
        } else if attacker_team.is_defeated() && !defender_team.is_defeated() {
            Some(defender_team.name.clone())
        } else {
            None
        };
        if let Some(team) = &winner {
            tracing::info!("team {} wins", team);
        }

        Ok(EncounterReport {
            rounds: round,
            attacks_resolved,
            fallen,
            experience,
            broken_weapons,
            winner,
        })
    }
}
