//! Systems that turn the three ambient clocks into `GameInput` events.

use bevy::{
    input::{keyboard::KeyboardInput, ButtonState},
    prelude::*,
};
use shared::{
    boat::KeyState,
    clock::FrameClock,
    session::GameInput,
};

use crate::{input::keyboard::action_for_key, KeyMap};

/// One-second repeating timer behind `GameInput::SecondElapsed`.
#[derive(Resource, Debug)]
pub struct SessionClock(pub Timer);

impl Default for SessionClock {
    fn default() -> Self {
        Self(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

#[derive(Resource, Debug, Default)]
pub struct FrameSteps(pub FrameClock);

pub fn keyboard_producer(
    mut keyboard_events: EventReader<KeyboardInput>,
    key_map: Res<KeyMap>,
    mut inputs: EventWriter<GameInput>,
) {
    for event in keyboard_events.read() {
        let state = match event.state {
            ButtonState::Pressed => KeyState::Pressed,
            ButtonState::Released => KeyState::Released,
        };
        inputs.write(GameInput::Key {
            action: action_for_key(&key_map, event.key_code),
            state,
        });
    }
}

pub fn second_producer(
    time: Res<Time>,
    mut clock: ResMut<SessionClock>,
    mut inputs: EventWriter<GameInput>,
) {
    clock.0.tick(time.delta());
    for _ in 0..clock.0.times_finished_this_tick() {
        inputs.write(GameInput::SecondElapsed);
    }
}

pub fn frame_producer(
    time: Res<Time>,
    mut steps: ResMut<FrameSteps>,
    mut inputs: EventWriter<GameInput>,
) {
    for _ in 0..steps.0.advance(time.delta_secs()) {
        inputs.write(GameInput::Frame);
    }
}
