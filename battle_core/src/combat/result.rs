//! AttackReport - outcome of a single attack

use serde::{Deserialize, Serialize};

/// How a single attack ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    /// The roll exceeded the hit chance; no state changed
    Miss,
    /// Damage was applied to the defender
    Hit,
    /// The hit applied, and it spent the weapon's last use
    WeaponBroken,
}

/// Result of one attack resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: String,
    pub defender: String,
    /// Weapon the blow was struck with, if a usable one was active
    pub weapon: Option<String>,
    pub outcome: AttackOutcome,
    /// Damage dealt (0 on a miss)
    pub damage: u32,
    /// Chance to hit out of 100; values above 100 always connect
    pub hit_chance: u32,
    /// The roll drawn from [0, 100)
    pub roll: u32,
}

impl AttackReport {
    /// Whether the attack connected
    pub fn connected(&self) -> bool {
        self.outcome != AttackOutcome::Miss
    }

    /// One-line narration for logs and cue display
    pub fn summary(&self) -> String {
        match self.outcome {
            AttackOutcome::Miss => format!("{} misses {}", self.attacker, self.defender),
            AttackOutcome::Hit => format!(
                "{} inflicts {} damage on {}",
                self.attacker, self.damage, self.defender
            ),
            AttackOutcome::WeaponBroken => match &self.weapon {
                Some(weapon) => format!(
                    "{} inflicts {} damage on {} and breaks their {}",
                    self.attacker, self.damage, self.defender, weapon
                ),
                None => format!(
                    "{} inflicts {} damage on {}",
                    self.attacker, self.damage, self.defender
                ),
            },
        }
    }
}
