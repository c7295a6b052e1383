//! battle_core - combat resolution for a turn-based tactics game
//!
//! This library provides:
//! - Unit / Weapon / Team: the combatant model and its invariants
//! - allocate_attacks / resolve_attack: pure attack arithmetic
//! - Encounter: the frame-driven battle sequencer, synchronized to a
//!   presentation-owned animation clock
//! - EncounterReport: post-battle resolution (experience, deaths, broken
//!   weapons, winning team)

pub mod combat;
pub mod config;
pub mod encounter;
pub mod experience;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use combat::{
    allocate_attacks, resolve_attack, resolve_attack_with_roll, AttackOutcome, AttackReport,
};
pub use config::{
    default_scenario, BattleConstants, ConfigError, ScenarioConfig, TeamConfig, UnitConfig,
    WeaponConfig,
};
pub use encounter::{
    AnimationCommand, BrokenWeapon, Encounter, EncounterError, EncounterEvent, EncounterReport,
    ExperienceGain, Phase, Tick,
};
pub use experience::{ExperienceRule, LevelGapRule, EXP_PER_LEVEL, MAX_LEVEL};
pub use types::{Affinity, Condition, ProficiencyRank, Side, WeaponKind};
pub use unit::{ModelError, Team, Unit, UnitStats, Weapon};
