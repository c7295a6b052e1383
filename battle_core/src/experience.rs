//! Experience grants after an encounter

use crate::unit::Unit;
use serde::{Deserialize, Serialize};

/// Points needed to advance one level
pub const EXP_PER_LEVEL: u32 = 100;

/// Highest reachable level; experience stops accumulating here
pub const MAX_LEVEL: u32 = 20;

/// Computes how many experience points a survivor earns from the opponent
/// it just faced. The formula is a pluggable collaborator: implementations
/// only read the two units, and the caller applies the points.
pub trait ExperienceRule {
    fn points(&self, survivor: &Unit, opponent: &Unit) -> u32;
}

/// Default rule: a base grant adjusted by the level gap, plus a flat bonus
/// for a kill, clamped to `[1, 100]` before the bonus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelGapRule {
    pub base: u32,
    pub per_level: u32,
    pub kill_bonus: u32,
}

impl Default for LevelGapRule {
    fn default() -> Self {
        LevelGapRule {
            base: 10,
            per_level: 5,
            kill_bonus: 20,
        }
    }
}

impl ExperienceRule for LevelGapRule {
    fn points(&self, survivor: &Unit, opponent: &Unit) -> u32 {
        let gap = opponent.level as i64 - survivor.level as i64;
        let scaled = self.base as i64 + gap * self.per_level as i64;
        let mut points = scaled.clamp(1, 100) as u32;
        if opponent.is_dead() {
            points += self.kill_bonus;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitStats;

    fn unit_at_level(name: &str, level: u32) -> Unit {
        Unit::new(
            name,
            UnitStats {
                health_max: 20,
                health: None,
                level,
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
    fn test_equal_levels_grant_base() {
        let rule = LevelGapRule::default();
        let a = unit_at_level("Anna", 5);
        let b = unit_at_level("Boris", 5);
        assert_eq!(rule.points(&a, &b), 10);
    }

    #[test]
    fn test_higher_level_opponent_grants_more() {
        let rule = LevelGapRule::default();
        let a = unit_at_level("Anna", 3);
        let b = unit_at_level("Boris", 7);
        assert_eq!(rule.points(&a, &b), 30);
    }

    #[test]
    fn test_grant_never_drops_below_one() {
        let rule = LevelGapRule::default();
        let a = unit_at_level("Anna", 20);
        let b = unit_at_level("Boris", 1);
        assert_eq!(rule.points(&a, &b), 1);
    }

    #[test]
    fn test_kill_bonus_applies_on_dead_opponent() {
        let rule = LevelGapRule::default();
        let a = unit_at_level("Anna", 5);
        let mut b = unit_at_level("Boris", 5);
        b.inflict_damage(100);
        assert_eq!(rule.points(&a, &b), 30);
    }
}
