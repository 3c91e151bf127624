//! Fixed-rate stepping for the per-frame producer.

use crate::constants::{FRAMES_PER_SECOND, MAX_FRAME_STEPS_PER_UPDATE};

/// Turns variable render deltas into a whole number of fixed simulation
/// steps, so boat speed does not depend on the display refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    step: f32,
    max_steps: u32,
    accumulated: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAMES_PER_SECOND, MAX_FRAME_STEPS_PER_UPDATE)
    }
}

impl FrameClock {
    pub fn new(frames_per_second: f32, max_steps: u32) -> Self {
        Self {
            step: 1.0 / frames_per_second,
            max_steps,
            accumulated: 0.0,
        }
    }

    /// Adds `delta_secs` and returns how many steps are due. Time beyond
    /// `max_steps` is dropped rather than replayed later.
    pub fn advance(&mut self, delta_secs: f32) -> u32 {
        self.accumulated += delta_secs.max(0.0);

        let due = (self.accumulated / self.step).floor() as u32;
        let steps = due.min(self.max_steps);
        if due > self.max_steps {
            log::debug!(
                "Frame clock dropping {} steps after a stall",
                due - self.max_steps
            );
            self.accumulated = 0.0;
        } else {
            self.accumulated -= steps as f32 * self.step;
        }
        steps
    }
}
