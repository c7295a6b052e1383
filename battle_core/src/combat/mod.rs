//! Attack arithmetic: attack-count allocation and single-attack resolution

mod allocation;
mod resolution;
mod result;

pub use allocation::allocate_attacks;
pub use resolution::{resolve_attack, resolve_attack_with_roll};
pub use result::{AttackOutcome, AttackReport};
