//! Encounter - the frame-driven battle sequencer
//!
//! An [`Encounter`] couples the attack arithmetic in [`crate::combat`] to
//! an animation clock owned by the presentation layer. The caller ticks it
//! once per frame with the elapsed time and the signed progress of the
//! in-flight attack tween (milliseconds at unit speed); damage lands only
//! when that progress crosses one full animation cycle.
//!
//! The sequencer takes both units by value for the battle's duration, so
//! nothing else can mutate their health or durability while it runs, and
//! hands the survivors back when [`Encounter::conclude`] resolves the
//! outcome.

mod aftermath;
mod event;

pub use aftermath::{BrokenWeapon, EncounterReport, ExperienceGain};
pub use event::{AnimationCommand, EncounterEvent};

use crate::combat::{allocate_attacks, resolve_attack, AttackOutcome};
use crate::config::BattleConstants;
use crate::types::Side;
use crate::unit::{ModelError, Unit};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

/// Sequencer misuse or invalid construction
#[derive(Error, Debug)]
pub enum EncounterError {
    #[error("combatant {0} is already at zero health")]
    DeadCombatant(String),
    #[error("the encounter has already finished")]
    Finished,
    #[error("the encounter is still in progress")]
    InProgress,
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Phase of the encounter state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// The active side's attack animation is playing forward
    Advance,
    /// The attack resolved; the animation is running back to rest
    Retreat,
    /// Holding on a broken-weapon banner
    BrokenNotice { remaining_ms: f32 },
    /// Short hold before the encounter yields control
    Cooldown { remaining_ms: f32 },
    /// Terminal; only [`Encounter::conclude`] is left to call
    Done,
}

/// What one call to [`Encounter::tick`] produced
#[derive(Debug, Clone)]
pub struct Tick {
    pub phase: Phase,
    pub round: u32,
    /// At most one animation directive per tick
    pub command: Option<AnimationCommand>,
    pub events: Vec<EncounterEvent>,
    pub done: bool,
}

/// A battle between two units, advanced one frame at a time.
#[derive(Debug)]
pub struct Encounter {
    attacker: Unit,
    defender: Unit,
    distance: u32,
    constants: BattleConstants,
    /// Remaining attacks, indexed by [`Side`]
    remaining: [u32; 2],
    round: u32,
    active: Side,
    phase: Phase,
    attacks_resolved: u32,
    /// Which sides broke their weapon during this encounter
    broke: [bool; 2],
    notice_queue: VecDeque<Side>,
}

fn index(side: Side) -> usize {
    match side {
        Side::Attacker => 0,
        Side::Defender => 1,
    }
}

impl Encounter {
    /// Start an encounter at the given distance with default timings.
    ///
    /// Takes both units by value; they come back through
    /// [`Encounter::conclude`]. Fails if either unit is already dead.
    pub fn new(attacker: Unit, defender: Unit, distance: u32) -> Result<Self, EncounterError> {
        Self::with_constants(attacker, defender, distance, BattleConstants::default())
    }

    /// Start an encounter with custom timing constants.
    pub fn with_constants(
        attacker: Unit,
        defender: Unit,
        distance: u32,
        constants: BattleConstants,
    ) -> Result<Self, EncounterError> {
        if attacker.is_dead() {
            return Err(EncounterError::DeadCombatant(attacker.name));
        }
        if defender.is_dead() {
            return Err(EncounterError::DeadCombatant(defender.name));
        }

        let (attacker_attacks, defender_attacks) = allocate_attacks(&attacker, &defender, distance);
        tracing::info!("{} vs {}", attacker.name, defender.name);
        tracing::info!("{} is going to attack {} times", attacker.name, attacker_attacks);
        tracing::info!("{} is going to attack {} times", defender.name, defender_attacks);

        // The attacker opens the battle unless it cannot reach at all.
        let active = if attacker_attacks == 0 && defender_attacks > 0 {
            Side::Defender
        } else {
            Side::Attacker
        };
        let phase = if attacker_attacks == 0 && defender_attacks == 0 {
            Phase::Cooldown {
                remaining_ms: constants.end_pause_ms,
            }
        } else {
            Phase::Advance
        };

        Ok(Encounter {
            attacker,
            defender,
            distance,
            constants,
            remaining: [attacker_attacks, defender_attacks],
            round: 1,
            active,
            phase,
            attacks_resolved: 0,
            broke: [false, false],
            notice_queue: VecDeque::new(),
        })
    }

    /// Advance the sequencer by one frame.
    ///
    /// `progress` is the signed clock of the active attack tween in
    /// milliseconds at unit speed, accumulated by the presentation layer;
    /// `dt` feeds the sequencer's own pause countdowns. `rng` supplies the
    /// hit rolls. Ticking a finished encounter returns
    /// [`EncounterError::Finished`] and changes nothing.
    pub fn tick(
        &mut self,
        dt: Duration,
        progress: f32,
        rng: &mut impl Rng,
    ) -> Result<Tick, EncounterError> {
        let dt_ms = dt.as_secs_f32() * 1000.0;
        let mut events = Vec::new();
        let mut command = None;

        match self.phase {
            Phase::Done => return Err(EncounterError::Finished),
            Phase::Advance => {
                if progress >= self.constants.animation_cycle_ms {
                    let report = match self.active {
                        Side::Attacker => {
                            resolve_attack(&mut self.attacker, &mut self.defender, rng)
                        }
                        Side::Defender => {
                            resolve_attack(&mut self.defender, &mut self.attacker, rng)
                        }
                    };
                    if report.outcome == AttackOutcome::WeaponBroken {
                        self.broke[index(self.active)] = true;
                    }
                    self.remaining[index(self.active)] =
                        self.remaining[index(self.active)].saturating_sub(1);
                    self.attacks_resolved += 1;
                    events.push(EncounterEvent::AttackResolved {
                        side: self.active,
                        report,
                    });
                    command = Some(AnimationCommand::Reverse);
                    self.phase = Phase::Retreat;
                }
            }
            Phase::Retreat => {
                if progress <= 0.0 {
                    let other = self.active.opponent();
                    if self.attacker.is_dead()
                        || self.defender.is_dead()
                        || self.remaining == [0, 0]
                    {
                        // remaining allocated attacks are discarded
                        self.enter_aftermath(&mut events);
                    } else if self.remaining[index(other)] > 0 {
                        self.active = other;
                        self.round += 1;
                        tracing::debug!("------ round {} ------", self.round);
                        events.push(EncounterEvent::RoundAdvanced { round: self.round });
                        command = Some(AnimationCommand::Begin(self.active));
                        self.phase = Phase::Advance;
                    } else {
                        // same side keeps swinging
                        command = Some(AnimationCommand::Begin(self.active));
                        self.phase = Phase::Advance;
                    }
                }
            }
            Phase::BrokenNotice { remaining_ms } => {
                let left = remaining_ms - dt_ms;
                if left <= 0.0 {
                    self.advance_aftermath(&mut events);
                } else {
                    self.phase = Phase::BrokenNotice { remaining_ms: left };
                }
            }
            Phase::Cooldown { remaining_ms } => {
                let left = remaining_ms - dt_ms;
                if left <= 0.0 {
                    self.phase = Phase::Done;
                    tracing::info!("battle between {} and {} ends", self.attacker.name, self.defender.name);
                } else {
                    self.phase = Phase::Cooldown { remaining_ms: left };
                }
            }
        }

        Ok(Tick {
            phase: self.phase,
            round: self.round,
            command,
            events,
            done: matches!(self.phase, Phase::Done),
        })
    }

    /// Queue the broken-weapon banners recorded during the sequence, then
    /// move on to the first of them (or straight to the cooldown).
    fn enter_aftermath(&mut self, events: &mut Vec<EncounterEvent>) {
        self.notice_queue.clear();
        if self.broke[index(Side::Attacker)] {
            self.notice_queue.push_back(Side::Attacker);
        }
        if self.broke[index(Side::Defender)] {
            self.notice_queue.push_back(Side::Defender);
        }
        self.advance_aftermath(events);
    }

    fn advance_aftermath(&mut self, events: &mut Vec<EncounterEvent>) {
        match self.notice_queue.pop_front() {
            Some(side) => {
                let unit = self.unit(side);
                let weapon = unit
                    .active_weapon()
                    .map(|weapon| weapon.name.clone())
                    .unwrap_or_default();
                tracing::info!("{}'s {} is broken", unit.name, weapon);
                events.push(EncounterEvent::BrokenWeaponNotice {
                    side,
                    unit: unit.name.clone(),
                    weapon,
                });
                self.phase = Phase::BrokenNotice {
                    remaining_ms: self.constants.broken_weapon_pause_ms,
                };
            }
            None => {
                self.phase = Phase::Cooldown {
                    remaining_ms: self.constants.end_pause_ms,
                };
            }
        }
    }

    pub fn attacker(&self) -> &Unit {
        &self.attacker
    }

    pub fn defender(&self) -> &Unit {
        &self.defender
    }

    /// The unit fighting for the given side
    pub fn unit(&self, side: Side) -> &Unit {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }

    /// Which side swings next (or last swung, between phases)
    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn remaining_attacks(&self, side: Side) -> u32 {
        self.remaining[index(side)]
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }
}
