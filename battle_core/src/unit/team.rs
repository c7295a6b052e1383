//! Team - an ordered roster of units under one banner

use super::{ModelError, Unit};
use serde::{Deserialize, Serialize};

/// A team of units. Roster names are unique; a team is defeated exactly
/// when its roster is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Display color (RGB)
    pub color: (u8, u8, u8),
    units: Vec<Unit>,
    /// Whether it is currently this team's turn
    pub my_turn: bool,
}

impl Team {
    /// Create a team, claiming ownership of its starting roster.
    /// Fails on duplicate unit names.
    pub fn new(
        name: impl Into<String>,
        color: (u8, u8, u8),
        units: Vec<Unit>,
    ) -> Result<Self, ModelError> {
        let mut team = Team {
            name: name.into(),
            color,
            units: Vec::with_capacity(units.len()),
            my_turn: false,
        };
        for unit in units {
            team.deploy(unit)?;
        }
        Ok(team)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Whether a unit with this name belongs to the team
    pub fn is_mine(&self, unit_name: &str) -> bool {
        self.units.iter().any(|unit| unit.name == unit_name)
    }

    pub fn find(&self, unit_name: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.name == unit_name)
    }

    /// Add a unit to the roster, stamping its team affiliation.
    /// Fails if the roster already holds a unit with the same name.
    pub fn deploy(&mut self, mut unit: Unit) -> Result<(), ModelError> {
        if self.is_mine(&unit.name) {
            return Err(ModelError::DuplicateUnit {
                team: self.name.clone(),
                unit: unit.name,
            });
        }
        unit.team = Some(self.name.clone());
        self.units.push(unit);
        Ok(())
    }

    /// Move a unit out of the roster, transferring ownership to the caller.
    /// The unit keeps its team affiliation so it can find its way back.
    pub fn withdraw(&mut self, unit_name: &str) -> Option<Unit> {
        let index = self.units.iter().position(|unit| unit.name == unit_name)?;
        Some(self.units.remove(index))
    }

    /// A team with no units left is defeated
    pub fn is_defeated(&self) -> bool {
        self.units.is_empty()
    }

    /// Start this team's turn: every unit becomes available again
    pub fn begin_turn(&mut self) {
        self.my_turn = true;
        for unit in &mut self.units {
            unit.played = false;
        }
        tracing::info!("team {} begins its turn", self.name);
    }

    /// End this team's turn
    pub fn end_turn(&mut self) {
        self.my_turn = false;
        for unit in &mut self.units {
            unit.played = false;
        }
        tracing::info!("team {} ends its turn", self.name);
    }

    /// Whether every unit on the roster has acted this turn
    pub fn is_turn_over(&self) -> bool {
        self.units.iter().all(|unit| unit.played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitStats;

    fn unit(name: &str) -> Unit {
        Unit::new(
            name,
            UnitStats {
                health_max: 20,
                health: None,
                level: 1,
                experience: 0,
                strength: 5,
                skill: 5,
                speed: 5,
                luck: 0,
                defence: 2,
                resistance: 1,
                movement: 4,
                constitution: 6,
                aid: 5,
                affinity: None,
                condition: None,
                proficiency: Default::default(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_roster_names_are_unique() {
        let err = Team::new("Reds", (255, 0, 0), vec![unit("Anna"), unit("Anna")]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateUnit { .. }));
    }

    #[test]
    fn test_deploy_stamps_affiliation() {
        let team = Team::new("Reds", (255, 0, 0), vec![unit("Anna")]).unwrap();
        assert_eq!(team.find("Anna").unwrap().team.as_deref(), Some("Reds"));
        assert!(team.is_mine("Anna"));
        assert!(!team.is_mine("Boris"));
    }

    #[test]
    fn test_withdraw_then_deploy_round_trips() {
        let mut team = Team::new("Reds", (255, 0, 0), vec![unit("Anna"), unit("Boris")]).unwrap();
        let anna = team.withdraw("Anna").unwrap();
        assert_eq!(team.units().len(), 1);
        assert!(!team.is_mine("Anna"));
        team.deploy(anna).unwrap();
        assert_eq!(team.units().len(), 2);
    }

    #[test]
    fn test_defeated_when_empty() {
        let mut team = Team::new("Reds", (255, 0, 0), vec![unit("Anna")]).unwrap();
        assert!(!team.is_defeated());
        team.withdraw("Anna");
        assert!(team.is_defeated());
    }

    #[test]
    fn test_turn_bookkeeping() {
        let mut team = Team::new("Reds", (255, 0, 0), vec![unit("Anna"), unit("Boris")]).unwrap();
        team.begin_turn();
        assert!(team.my_turn);
        assert!(!team.is_turn_over());

        if let Some(anna) = team.units.iter_mut().find(|u| u.name == "Anna") {
            anna.played = true;
        }
        assert!(!team.is_turn_over());
        for u in &mut team.units {
            u.played = true;
        }
        assert!(team.is_turn_over());

        team.end_turn();
        assert!(!team.my_turn);
        assert!(team.units().iter().all(|u| !u.played));
    }
}
