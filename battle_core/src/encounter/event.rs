//! Side-channel events and animation directives emitted by the sequencer

use crate::combat::AttackReport;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Directive for the presentation layer's attack animation.
///
/// The sequencer never owns the animation clock; it observes the clock's
/// progress and answers with at most one of these per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCommand {
    /// Play the in-flight attack tween backward from its current point
    Reverse,
    /// Start a fresh forward cycle for the given side's unit
    Begin(Side),
}

/// Notification for the presentation layer (cue selection, banners, log).
/// Events are carried on the tick result; the sequencer never blocks on
/// their consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterEvent {
    /// One attack was resolved; the report selects the audio/visual cue
    AttackResolved { side: Side, report: AttackReport },
    /// The round counter advanced after a side swap
    RoundAdvanced { round: u32 },
    /// A participant's weapon was spent during the encounter; shown while
    /// the sequencer holds on the broken-weapon pause
    BrokenWeaponNotice {
        side: Side,
        unit: String,
        weapon: String,
    },
}
