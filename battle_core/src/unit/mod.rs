//! Combatant model: units, their weapons, and the teams that field them

mod team;
mod weapon;

pub use team::Team;
pub use weapon::Weapon;

use crate::experience::{EXP_PER_LEVEL, MAX_LEVEL};
use crate::types::{Affinity, Condition, ProficiencyRank, WeaponKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Invariant violation while building the combatant model
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("unit {0} must have a maximum health above zero")]
    ZeroMaxHealth(String),
    #[error("unit {name} starts with {health} health, above its maximum of {health_max}")]
    HealthAboveMax {
        name: String,
        health: u32,
        health_max: u32,
    },
    #[error("team {team} already fields a unit named {unit}")]
    DuplicateUnit { team: String, unit: String },
}

/// The fixed stat block a unit is created from.
///
/// `health` is the starting health; when absent the unit starts at full
/// health. All other values default to zero (level defaults to 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitStats {
    pub health_max: u32,
    #[serde(default)]
    pub health: Option<u32>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub skill: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub luck: u32,
    #[serde(default)]
    pub defence: u32,
    #[serde(default)]
    pub resistance: u32,
    #[serde(default)]
    pub movement: u32,
    #[serde(default)]
    pub constitution: u32,
    #[serde(default)]
    pub aid: u32,
    #[serde(default)]
    pub affinity: Option<Affinity>,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub proficiency: BTreeMap<WeaponKind, ProficiencyRank>,
}

fn default_level() -> u32 {
    1
}

/// A combatant with a stat block, an inventory, and accumulated experience.
///
/// Health always satisfies `0 <= health <= health_max`; the only mutation
/// paths are combat resolution (health, weapon durability, experience) and
/// turn bookkeeping (`played`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    /// Home team; set when the unit is deployed to a team
    pub team: Option<String>,
    pub health_max: u32,
    pub health: u32,
    pub level: u32,
    pub experience: u32,
    /// Determines the damage inflicted on the enemy
    pub strength: u32,
    /// Chance of hitting the enemy
    pub skill: u32,
    /// The faster of two combatants attacks twice
    pub speed: u32,
    pub luck: u32,
    /// Reduces physical damage
    pub defence: u32,
    /// Reduces magical damage
    pub resistance: u32,
    /// How far the unit can move in a turn
    pub movement: u32,
    /// Physical size; affects rescues
    pub constitution: u32,
    /// Maximum rescuable constitution
    pub aid: u32,
    pub affinity: Option<Affinity>,
    pub condition: Option<Condition>,
    /// Per-weapon-type proficiency ranks
    pub proficiency: BTreeMap<WeaponKind, ProficiencyRank>,
    /// Carried equipment; at most one item is active
    pub items: Vec<Weapon>,
    /// Whether the unit already acted this turn
    pub played: bool,
}

impl Unit {
    /// Create a unit from its stat block.
    ///
    /// Fails if `health_max` is zero or the starting health exceeds it.
    pub fn new(name: impl Into<String>, stats: UnitStats) -> Result<Self, ModelError> {
        let name = name.into();
        if stats.health_max == 0 {
            return Err(ModelError::ZeroMaxHealth(name));
        }
        let health = stats.health.unwrap_or(stats.health_max);
        if health > stats.health_max {
            return Err(ModelError::HealthAboveMax {
                name,
                health,
                health_max: stats.health_max,
            });
        }
        Ok(Unit {
            name,
            team: None,
            health_max: stats.health_max,
            health,
            level: stats.level,
            experience: stats.experience,
            strength: stats.strength,
            skill: stats.skill,
            speed: stats.speed,
            luck: stats.luck,
            defence: stats.defence,
            resistance: stats.resistance,
            movement: stats.movement,
            constitution: stats.constitution,
            aid: stats.aid,
            affinity: stats.affinity,
            condition: stats.condition,
            proficiency: stats.proficiency,
            items: Vec::new(),
            played: false,
        })
    }

    /// The active weapon, if any
    pub fn active_weapon(&self) -> Option<&Weapon> {
        self.items.iter().find(|item| item.active)
    }

    /// Mutable access to the active weapon, if any
    pub fn active_weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.items.iter_mut().find(|item| item.active)
    }

    /// Give a weapon to the unit. When `active`, any previously active item
    /// is deactivated so at most one stays selected.
    pub fn give_weapon(&mut self, mut weapon: Weapon, active: bool) {
        if active {
            for item in &mut self.items {
                item.active = false;
            }
        }
        weapon.active = active;
        self.items.push(weapon);
    }

    /// Effective attack reach: the active weapon's range while it has uses
    /// left, otherwise 1 (unarmed reach).
    pub fn weapon_range(&self) -> u32 {
        match self.active_weapon() {
            Some(weapon) if weapon.is_usable() => weapon.range,
            _ => 1,
        }
    }

    /// How far away this unit can deliver an attack in one turn
    pub fn attack_distance(&self) -> u32 {
        self.weapon_range() + self.movement
    }

    /// Remaining health as a percentage of the maximum
    pub fn life_percent(&self) -> u32 {
        self.health * 100 / self.health_max
    }

    /// Subtract damage from health, clamped at zero
    pub fn inflict_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
        if self.health == 0 {
            tracing::info!("{} died", self.name);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Add experience points, rolling over into levels every
    /// [`EXP_PER_LEVEL`] points up to [`MAX_LEVEL`]. Returns whether at
    /// least one level was gained.
    pub fn gain_exp(&mut self, points: u32) -> bool {
        let mut levelled_up = false;
        self.experience += points;
        while self.experience >= EXP_PER_LEVEL && self.level < MAX_LEVEL {
            self.experience -= EXP_PER_LEVEL;
            self.level += 1;
            levelled_up = true;
            tracing::info!("{} reached level {}", self.name, self.level);
        }
        if self.level >= MAX_LEVEL {
            self.experience = self.experience.min(EXP_PER_LEVEL - 1);
        }
        levelled_up
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HP: {}/{}", self.health, self.health_max)?;
        writeln!(f, "Lv: {}\tE: {}", self.level, self.experience)?;
        writeln!(f, "Str: {}\tSkill: {}", self.strength, self.skill)?;
        writeln!(f, "Spd: {}\tLuck: {}", self.speed, self.luck)?;
        writeln!(f, "Def: {}\tRes: {}", self.defence, self.resistance)?;
        writeln!(f, "Move: {}\tCon: {}", self.movement, self.constitution)?;
        match self.active_weapon() {
            Some(weapon) => write!(f, "Weapon: {} ({} uses)", weapon.name, weapon.uses),
            None => write!(f, "Weapon: none"),
        }
    }
}
