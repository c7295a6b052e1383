//! Weapon - an equippable item with finite durability

use crate::types::WeaponKind;
use serde::{Deserialize, Serialize};

/// An equippable weapon.
///
/// A weapon with 0 remaining uses can still be carried, but it no longer
/// contributes might, hit bonus, or reach: its carrier fights unarmed until
/// another weapon is made active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub kind: WeaponKind,
    /// Flat damage bonus
    pub might: u32,
    /// Flat addition to hit chance
    pub hit: u32,
    /// Reach in map tiles
    pub range: u32,
    /// Remaining successful uses before the weapon breaks
    pub uses: u32,
    /// Whether this is the carrier's selected weapon
    pub active: bool,
}

impl Weapon {
    /// Create a new, inactive weapon
    pub fn new(
        name: impl Into<String>,
        kind: WeaponKind,
        might: u32,
        hit: u32,
        range: u32,
        uses: u32,
    ) -> Self {
        Weapon {
            name: name.into(),
            kind,
            might,
            hit,
            range,
            uses,
            active: false,
        }
    }

    /// Spend one use on a successful hit. Returns the remaining count.
    pub fn spend_use(&mut self) -> u32 {
        self.uses = self.uses.saturating_sub(1);
        self.uses
    }

    /// Whether the weapon still has uses left
    pub fn is_usable(&self) -> bool {
        self.uses > 0
    }
}
