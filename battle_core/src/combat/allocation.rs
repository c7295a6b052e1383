//! Attack-count allocation for an encounter

use crate::unit::Unit;

/// How many times each side gets to attack over one encounter, given the
/// distance in tiles between the two units.
///
/// Base allocation is one attack each. The strictly faster unit gains one
/// extra attack (a double); a speed tie grants no bonus. A side whose
/// effective weapon range is shorter than the distance cannot attack at
/// all.
///
/// Pure function: deterministic for identical inputs, no side effects.
pub fn allocate_attacks(attacker: &Unit, defender: &Unit, distance: u32) -> (u32, u32) {
    let mut attacker_attacks = 1;
    let mut defender_attacks = 1;

    if attacker.speed > defender.speed {
        attacker_attacks += 1;
    } else if defender.speed > attacker.speed {
        defender_attacks += 1;
    }

    if attacker.weapon_range() < distance {
        attacker_attacks = 0;
    }
    if defender.weapon_range() < distance {
        defender_attacks = 0;
    }

    (attacker_attacks, defender_attacks)
}
