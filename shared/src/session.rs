//! The game session and its reducer.
//!
//! Three producers (frame steps, the one-second clock and keyboard events)
//! write [`GameInput`] events; [`GameSession::apply`] is the only place that
//! mutates game state, and it reports what changed as [`SessionEffect`]s so
//! the renderer can mirror it.

use bevy::math::Vec3;
use bevy::prelude::{Event, Resource};
use bevy_log::{debug, info};
use rand::Rng;

use crate::boat::{Boat, BoatAction, KeyState};
use crate::collision::is_colliding;
use crate::constants::WARMUP_SECONDS;
use crate::countdown::{Countdown, CountdownTick};
use crate::level::Level;
use crate::spawner::spawn_trash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrashId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trash {
    pub id: TrashId,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Boat can move but nothing is collected yet.
    Warmup { seconds_left: u32 },
    Playing,
    Finished(Outcome),
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    Frame,
    SecondElapsed,
    Key {
        action: Option<BoatAction>,
        state: KeyState,
    },
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SessionEffect {
    Started,
    TrashCollected(TrashId),
    ClockChanged(Countdown),
    Finished(Outcome),
}

#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    level: Level,
    boat: Boat,
    trash: Vec<Trash>,
    countdown: Countdown,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new(level: Level, trash: Vec<Trash>) -> Self {
        Self {
            level,
            boat: Boat::default(),
            trash,
            countdown: Countdown::default(),
            phase: SessionPhase::Warmup {
                seconds_left: WARMUP_SECONDS,
            },
        }
    }

    /// Builds a session with freshly spawned trash for `level`.
    pub fn start<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Self {
        let session = Self::new(level, spawn_trash(level, rng));
        info!(
            "Starting session on level {} with {} trash objects",
            level,
            session.trash.len()
        );
        session
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn boat(&self) -> &Boat {
        &self.boat
    }

    pub fn trash(&self) -> &[Trash] {
        &self.trash
    }

    pub fn remaining_trash(&self) -> usize {
        self.trash.len()
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            SessionPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Applies one input and returns what changed, in order.
    pub fn apply(&mut self, input: GameInput) -> Vec<SessionEffect> {
        let mut effects = Vec::new();
        if self.is_finished() {
            return effects;
        }

        match input {
            GameInput::Key { action, state } => self.boat.motion.apply_key(action, state),
            GameInput::SecondElapsed => self.on_second(&mut effects),
            GameInput::Frame => self.on_frame(&mut effects),
        }
        effects
    }

    fn finish(&mut self, outcome: Outcome, effects: &mut Vec<SessionEffect>) {
        info!(
            "Session on level {} finished: {:?} with {} trash left at {}",
            self.level,
            outcome,
            self.trash.len(),
            self.countdown
        );
        self.phase = SessionPhase::Finished(outcome);
        effects.push(SessionEffect::Finished(outcome));
    }

    fn on_second(&mut self, effects: &mut Vec<SessionEffect>) {
        let tick = self.countdown.tick();
        effects.push(SessionEffect::ClockChanged(self.countdown));
        if tick == CountdownTick::Expired {
            self.finish(Outcome::Lost, effects);
            return;
        }

        if let SessionPhase::Warmup { seconds_left } = self.phase {
            let seconds_left = seconds_left.saturating_sub(1);
            if seconds_left == 0 {
                debug!("Warmup over, collisions enabled");
                self.phase = SessionPhase::Playing;
                effects.push(SessionEffect::Started);
            } else {
                self.phase = SessionPhase::Warmup { seconds_left };
            }
        }
    }

    fn on_frame(&mut self, effects: &mut Vec<SessionEffect>) {
        self.boat.step();

        if self.phase != SessionPhase::Playing {
            return;
        }

        let boat_position = self.boat.position;
        self.trash.retain(|trash| {
            if is_colliding(boat_position, trash.position) {
                effects.push(SessionEffect::TrashCollected(trash.id));
                false
            } else {
                true
            }
        });

        if self.trash.is_empty() {
            self.finish(Outcome::Won, effects);
        }
    }
}
