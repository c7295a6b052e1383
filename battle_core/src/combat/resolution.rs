//! Single-attack resolution

use super::result::{AttackOutcome, AttackReport};
use crate::unit::Unit;
use rand::Rng;

/// Resolve one attack, drawing the hit roll from the supplied random
/// source (uniform in `[0, 100)`).
///
/// Mutates the defender's health and, on a connecting armed hit, the
/// attacker's active weapon durability. Nothing else is touched.
pub fn resolve_attack(
    attacker: &mut Unit,
    defender: &mut Unit,
    rng: &mut impl Rng,
) -> AttackReport {
    let roll: u32 = rng.gen_range(0..100);
    resolve_attack_with_roll(attacker, defender, roll)
}

/// Resolve one attack with a fixed roll (for reproducible resolution).
///
/// An attacker with no active weapon, or whose active weapon is out of
/// uses, fights unarmed: damage is `strength - defence` and the hit chance
/// gets no weapon bonus. Damage never goes negative; a roll strictly above
/// the hit chance misses, so chances above 100 always connect.
pub fn resolve_attack_with_roll(attacker: &mut Unit, defender: &mut Unit, roll: u32) -> AttackReport {
    let weapon_index = attacker
        .items
        .iter()
        .position(|item| item.active && item.is_usable());

    let (damage, hit_chance, weapon) = match weapon_index {
        Some(index) => {
            let weapon = &attacker.items[index];
            (
                (attacker.strength + weapon.might).saturating_sub(defender.defence),
                attacker.skill * 2 + weapon.hit + attacker.luck / 2,
                Some(weapon.name.clone()),
            )
        }
        None => (
            attacker.strength.saturating_sub(defender.defence),
            attacker.skill * 2 + attacker.luck / 2,
            None,
        ),
    };

    match &weapon {
        Some(name) => tracing::debug!(
            "{} attacks {} using {} (dmg {}, hit {})",
            attacker.name,
            defender.name,
            name,
            damage,
            hit_chance
        ),
        None => tracing::debug!(
            "{} attacks {} unarmed (dmg {}, hit {})",
            attacker.name,
            defender.name,
            damage,
            hit_chance
        ),
    }

    let outcome = if roll > hit_chance {
        tracing::debug!("{} misses {}", attacker.name, defender.name);
        AttackOutcome::Miss
    } else {
        tracing::debug!("{} inflicts {} damage on {}", attacker.name, damage, defender.name);
        defender.inflict_damage(damage);
        match weapon_index {
            Some(index) if attacker.items[index].spend_use() == 0 => AttackOutcome::WeaponBroken,
            _ => AttackOutcome::Hit,
        }
    };

    AttackReport {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        weapon,
        outcome,
        damage: if outcome == AttackOutcome::Miss { 0 } else { damage },
        hit_chance,
        roll,
    }
}
