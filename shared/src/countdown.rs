use std::fmt;

use crate::constants::{COUNTDOWN_START_MINUTES, COUNTDOWN_START_SECONDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running,
    /// The clock just reached, or already sat at, 00:00.
    Expired,
}

/// Minutes and seconds left in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub minutes: u8,
    pub seconds: u8,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(COUNTDOWN_START_MINUTES, COUNTDOWN_START_SECONDS)
    }
}

impl Countdown {
    pub fn new(minutes: u8, seconds: u8) -> Self {
        Self {
            minutes,
            seconds: seconds.min(59),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    pub fn total_seconds(&self) -> u32 {
        u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// Removes one second, borrowing a minute when seconds underflow.
    pub fn tick(&mut self) -> CountdownTick {
        if self.is_expired() {
            return CountdownTick::Expired;
        }

        if self.seconds == 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            self.seconds -= 1;
        }

        if self.is_expired() {
            CountdownTick::Expired
        } else {
            CountdownTick::Running
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_five_minutes() {
        let countdown = Countdown::default();
        assert_eq!(countdown.to_string(), "05:00");
        assert_eq!(countdown.total_seconds(), 300);
    }

    #[test]
    fn test_first_tick_borrows_a_minute() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.tick(), CountdownTick::Running);
        assert_eq!(countdown, Countdown::new(4, 59));
        assert_eq!(countdown.to_string(), "04:59");
    }

    #[test]
    fn test_expires_after_three_hundred_ticks() {
        let mut countdown = Countdown::default();
        for _ in 0..299 {
            assert_eq!(countdown.tick(), CountdownTick::Running);
        }
        assert_eq!(countdown.to_string(), "00:01");
        assert_eq!(countdown.tick(), CountdownTick::Expired);
        assert_eq!(countdown.to_string(), "00:00");
    }

    #[test]
    fn test_expired_clock_stays_at_zero() {
        let mut countdown = Countdown::new(0, 0);
        assert_eq!(countdown.tick(), CountdownTick::Expired);
        assert_eq!(countdown, Countdown::new(0, 0));
    }
}
