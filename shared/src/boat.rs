//! Boat control state and per-frame motion.

use bevy::math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{
    BOAT_FORWARD_SPEED, BOAT_SPAWN_HEADING, BOAT_SPAWN_POSITION, BOAT_TURN_RATE,
};

/// Player intents the key map binds keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BoatAction {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoatMotion {
    pub velocity: f32,
    pub angular_velocity: f32,
}

impl BoatMotion {
    pub fn press(&mut self, action: BoatAction) {
        match action {
            BoatAction::Forward => self.velocity = BOAT_FORWARD_SPEED,
            BoatAction::Backward => self.velocity = -BOAT_FORWARD_SPEED,
            BoatAction::TurnRight => self.angular_velocity = -BOAT_TURN_RATE,
            BoatAction::TurnLeft => self.angular_velocity = BOAT_TURN_RATE,
        }
    }

    pub fn stop(&mut self) {
        self.velocity = 0.0;
        self.angular_velocity = 0.0;
    }

    /// Applies one key transition. Releasing any key, bound or not, stops
    /// both translation and rotation.
    pub fn apply_key(&mut self, action: Option<BoatAction>, state: KeyState) {
        match (state, action) {
            (KeyState::Pressed, Some(action)) => self.press(action),
            (KeyState::Pressed, None) => {}
            (KeyState::Released, _) => self.stop(),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != 0.0 || self.angular_velocity != 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boat {
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians.
    pub heading: f32,
    pub motion: BoatMotion,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            position: BOAT_SPAWN_POSITION,
            heading: BOAT_SPAWN_HEADING,
            motion: BoatMotion::default(),
        }
    }
}

impl Boat {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }

    /// The model faces its local +X axis.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// One frame of motion: rotate first, then move along the new forward axis.
    pub fn step(&mut self) {
        self.heading += self.motion.angular_velocity;
        self.position += self.forward() * self.motion.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn boat_at_origin() -> Boat {
        Boat {
            position: Vec3::ZERO,
            heading: 0.0,
            motion: BoatMotion::default(),
        }
    }

    #[test]
    fn test_key_presses_set_velocities() {
        let mut motion = BoatMotion::default();
        motion.apply_key(Some(BoatAction::Forward), KeyState::Pressed);
        assert_eq!(motion.velocity, 1.0);
        motion.apply_key(Some(BoatAction::Backward), KeyState::Pressed);
        assert_eq!(motion.velocity, -1.0);
        motion.apply_key(Some(BoatAction::TurnRight), KeyState::Pressed);
        assert_eq!(motion.angular_velocity, -0.1);
        motion.apply_key(Some(BoatAction::TurnLeft), KeyState::Pressed);
        assert_eq!(motion.angular_velocity, 0.1);
    }

    #[test]
    fn test_unbound_press_is_ignored() {
        let mut motion = BoatMotion::default();
        motion.apply_key(Some(BoatAction::Forward), KeyState::Pressed);
        motion.apply_key(None, KeyState::Pressed);
        assert_eq!(motion.velocity, 1.0);
    }

    // Known quirk: releasing the turn key also kills forward motion.
    #[test]
    fn test_releasing_any_key_stops_all_motion() {
        for released in [
            None,
            Some(BoatAction::Forward),
            Some(BoatAction::Backward),
            Some(BoatAction::TurnLeft),
            Some(BoatAction::TurnRight),
        ] {
            let mut motion = BoatMotion::default();
            motion.apply_key(Some(BoatAction::Forward), KeyState::Pressed);
            motion.apply_key(Some(BoatAction::TurnLeft), KeyState::Pressed);
            assert!(motion.is_moving());

            motion.apply_key(released, KeyState::Released);
            assert_eq!(motion, BoatMotion::default(), "released {:?}", released);
        }
    }

    #[test]
    fn test_step_moves_along_local_x() {
        let mut boat = boat_at_origin();
        boat.motion.press(BoatAction::Forward);
        boat.step();
        assert!((boat.position - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_step_rotates_before_translating() {
        let mut boat = boat_at_origin();
        boat.heading = FRAC_PI_2 - BOAT_TURN_RATE;
        boat.motion.press(BoatAction::TurnLeft);
        boat.motion.press(BoatAction::Forward);
        boat.step();
        // Heading is now a quarter turn, so local +X points to world -Z.
        assert!((boat.heading - FRAC_PI_2).abs() < 1e-5);
        assert!((boat.position - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_idle_boat_does_not_move() {
        let mut boat = Boat::default();
        boat.step();
        assert_eq!(boat, Boat::default());
    }
}
