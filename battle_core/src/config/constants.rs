//! Encounter timing constants

use serde::{Deserialize, Serialize};

/// Tunable timings for the encounter sequencer, in milliseconds at unit
/// animation speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConstants {
    /// One full attack-animation cycle; the progress signal must cross
    /// this before a swing lands
    #[serde(default = "default_animation_cycle_ms")]
    pub animation_cycle_ms: f32,
    /// Hold on the broken-weapon banner
    #[serde(default = "default_broken_weapon_pause_ms")]
    pub broken_weapon_pause_ms: f32,
    /// Hold after the last swing before control returns to the caller
    #[serde(default = "default_end_pause_ms")]
    pub end_pause_ms: f32,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            animation_cycle_ms: 1000.0,
            broken_weapon_pause_ms: 3000.0,
            end_pause_ms: 500.0,
        }
    }
}

fn default_animation_cycle_ms() -> f32 {
    1000.0
}
fn default_broken_weapon_pause_ms() -> f32 {
    3000.0
}
fn default_end_pause_ms() -> f32 {
    500.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = BattleConstants::default();
        assert!((constants.animation_cycle_ms - 1000.0).abs() < f32::EPSILON);
        assert!((constants.broken_weapon_pause_ms - 3000.0).abs() < f32::EPSILON);
        assert!((constants.end_pause_ms - 500.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_constants_with_defaults() {
        let toml = r#"
animation_cycle_ms = 800.0
"#;
        let constants: BattleConstants = toml::from_str(toml).unwrap();
        assert!((constants.animation_cycle_ms - 800.0).abs() < f32::EPSILON);
        assert!((constants.end_pause_ms - 500.0).abs() < f32::EPSILON);
    }
}
