//! Core types shared across the battle library

use serde::{Deserialize, Serialize};

/// One of the two participants in an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// Weapon categories a unit can hold a proficiency rank in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Sword,
    Lance,
    Axe,
    Bow,
    Tome,
    Staff,
}

impl WeaponKind {
    /// Get all weapon kinds
    pub fn all() -> &'static [WeaponKind] {
        &[
            WeaponKind::Sword,
            WeaponKind::Lance,
            WeaponKind::Axe,
            WeaponKind::Bow,
            WeaponKind::Tome,
            WeaponKind::Staff,
        ]
    }
}

/// Proficiency rank ladder, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyRank {
    E,
    D,
    C,
    B,
    A,
    S,
}

/// Elemental affinity determining compatibility with other units.
/// Data-model attribute only; it has no effect on combat arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    Fire,
    Thunder,
    Wind,
    Ice,
    Dark,
    Light,
    Anima,
}

/// Health condition afflicting a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Poisoned,
    Asleep,
    Silenced,
    Berserk,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Attacker.opponent(), Side::Defender);
        assert_eq!(Side::Defender.opponent(), Side::Attacker);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(ProficiencyRank::E < ProficiencyRank::D);
        assert!(ProficiencyRank::A < ProficiencyRank::S);
    }

    #[test]
    fn test_weapon_kind_serde() {
        let kind: WeaponKind = serde_json::from_str("\"sword\"").unwrap();
        assert_eq!(kind, WeaponKind::Sword);
    }
}
