//! Scenario definitions: teams, units, and their weapons

use super::ConfigError;
use crate::types::WeaponKind;
use crate::unit::{Team, Unit, UnitStats, Weapon};
use serde::{Deserialize, Serialize};

/// A full scenario as read from a TOML or JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub teams: Vec<TeamConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    /// Display color as `[r, g, b]`
    pub color: [u8; 3],
    #[serde(default)]
    pub units: Vec<UnitConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    pub name: String,
    #[serde(flatten)]
    pub stats: UnitStats,
    #[serde(default)]
    pub weapons: Vec<WeaponConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponConfig {
    pub name: String,
    pub kind: WeaponKind,
    #[serde(default)]
    pub might: u32,
    #[serde(default)]
    pub hit: u32,
    #[serde(default = "default_range")]
    pub range: u32,
    pub uses: u32,
    /// Marks the unit's selected weapon; defaults to the first listed
    #[serde(default)]
    pub active: bool,
}

fn default_range() -> u32 {
    1
}

impl ScenarioConfig {
    /// Build the teams this scenario describes, validating every unit.
    pub fn into_teams(self) -> Result<Vec<Team>, ConfigError> {
        let mut teams = Vec::with_capacity(self.teams.len());
        for team_config in self.teams {
            let mut units = Vec::with_capacity(team_config.units.len());
            for unit_config in team_config.units {
                let mut unit = Unit::new(unit_config.name, unit_config.stats)?;
                let active_index = unit_config
                    .weapons
                    .iter()
                    .position(|weapon| weapon.active)
                    .unwrap_or(0);
                for (i, weapon_config) in unit_config.weapons.into_iter().enumerate() {
                    let weapon = Weapon::new(
                        weapon_config.name,
                        weapon_config.kind,
                        weapon_config.might,
                        weapon_config.hit,
                        weapon_config.range,
                        weapon_config.uses,
                    );
                    unit.give_weapon(weapon, i == active_index);
                }
                units.push(unit);
            }
            let (r, g, b) = (team_config.color[0], team_config.color[1], team_config.color[2]);
            teams.push(Team::new(team_config.name, (r, g, b), units)?);
        }
        Ok(teams)
    }
}

/// The built-in two-team skirmish used by the TUI and the examples.
pub fn default_scenario() -> ScenarioConfig {
    fn fighter(name: &str, stats: UnitStats, weapons: Vec<WeaponConfig>) -> UnitConfig {
        UnitConfig {
            name: name.to_string(),
            stats,
            weapons,
        }
    }
    fn sword(name: &str, might: u32, hit: u32, uses: u32) -> WeaponConfig {
        WeaponConfig {
            name: name.to_string(),
            kind: WeaponKind::Sword,
            might,
            hit,
            range: 1,
            uses,
            active: false,
        }
    }

    let stats = |health_max, strength, skill, speed, luck, defence| UnitStats {
        health_max,
        health: None,
        level: 1,
        experience: 0,
        strength,
        skill,
        speed,
        luck,
        defence,
        resistance: 2,
        movement: 5,
        constitution: 7,
        aid: 6,
        affinity: None,
        condition: None,
        proficiency: Default::default(),
    };

    ScenarioConfig {
        teams: vec![
            TeamConfig {
                name: "Azure Guard".to_string(),
                color: [60, 120, 230],
                units: vec![
                    fighter(
                        "Runa",
                        stats(28, 9, 12, 10, 6, 5),
                        vec![sword("Iron Sword", 5, 90, 46)],
                    ),
                    fighter(
                        "Torvald",
                        stats(34, 11, 8, 6, 3, 8),
                        vec![sword("Steel Sword", 8, 75, 30)],
                    ),
                ],
            },
            TeamConfig {
                name: "Ember Band".to_string(),
                color: [230, 80, 50],
                units: vec![
                    fighter(
                        "Sigrid",
                        stats(30, 10, 10, 10, 4, 6),
                        vec![sword("Iron Sword", 5, 90, 46)],
                    ),
                    fighter(
                        "Ketil",
                        stats(26, 8, 14, 12, 8, 4),
                        vec![sword("Slim Sword", 3, 100, 30)],
                    ),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_toml;

    #[test]
    fn test_default_scenario_builds_two_teams() {
        let teams = default_scenario().into_teams().unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].units().len(), 2);
        let runa = teams[0].find("Runa").unwrap();
        assert_eq!(runa.active_weapon().unwrap().name, "Iron Sword");
        assert_eq!(runa.team.as_deref(), Some("Azure Guard"));
    }

    #[test]
    fn test_parse_scenario_from_toml() {
        let toml = r#"
[[teams]]
name = "Reds"
color = [255, 0, 0]

[[teams.units]]
name = "Anna"
health_max = 30
strength = 9
skill = 12
speed = 10

[[teams.units.weapons]]
name = "Iron Sword"
kind = "sword"
might = 5
hit = 90
uses = 46
active = true

[[teams]]
name = "Blues"
color = [0, 0, 255]
"#;
        let scenario: ScenarioConfig = parse_toml(toml).unwrap();
        let teams = scenario.into_teams().unwrap();
        assert_eq!(teams.len(), 2);
        let anna = teams[0].find("Anna").unwrap();
        assert_eq!(anna.health, 30);
        assert_eq!(anna.level, 1);
        assert_eq!(anna.active_weapon().unwrap().might, 5);
        assert_eq!(anna.weapon_range(), 1);
    }

    #[test]
    fn test_invalid_unit_is_rejected() {
        let toml = r#"
[[teams]]
name = "Reds"
color = [255, 0, 0]

[[teams.units]]
name = "Ghost"
health_max = 0
"#;
        let scenario: ScenarioConfig = parse_toml(toml).unwrap();
        assert!(matches!(
            scenario.into_teams(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_first_weapon_active_by_default() {
        let toml = r#"
[[teams]]
name = "Reds"
color = [255, 0, 0]

[[teams.units]]
name = "Anna"
health_max = 30

[[teams.units.weapons]]
name = "Iron Sword"
kind = "sword"
uses = 46

[[teams.units.weapons]]
name = "Iron Lance"
kind = "lance"
uses = 45
"#;
        let scenario: ScenarioConfig = parse_toml(toml).unwrap();
        let teams = scenario.into_teams().unwrap();
        let anna = teams[0].find("Anna").unwrap();
        assert_eq!(anna.active_weapon().unwrap().name, "Iron Sword");
    }
}
