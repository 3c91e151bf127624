//! Difficulty levels and their fixed spawn configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Axis-aligned rectangle on the water plane, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub half_x: f32,
    pub half_z: f32,
}

impl SpawnArea {
    pub const fn new(half_x: f32, half_z: f32) -> Self {
        Self { half_x, half_z }
    }

    /// Inclusive containment test on the x/z plane.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x.abs() <= self.half_x && z.abs() <= self.half_z
    }
}

/// The box around the boat's starting point every level draws from.
pub const NEAR_AREA: SpawnArea = SpawnArea::new(100.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub trash_count: usize,
    /// Chance for a single trash object to land in [`NEAR_AREA`].
    pub near_probability: f64,
    /// Where the remaining trash goes; `None` keeps everything near.
    pub far_area: Option<SpawnArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("unknown level {0}, expected 1, 2 or 3")]
    Unknown(u8),
    #[error("level must be a number, got {0:?}")]
    NotANumber(String),
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn id(self) -> u8 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
        }
    }

    /// Label shown on the start menu button.
    pub fn label(self) -> &'static str {
        match self {
            Level::Easy => "Fácil",
            Level::Medium => "Médio",
            Level::Hard => "Difícil",
        }
    }

    pub fn config(self) -> LevelConfig {
        match self {
            Level::Easy => LevelConfig {
                trash_count: 100,
                near_probability: 1.0,
                far_area: None,
            },
            Level::Medium => LevelConfig {
                trash_count: 250,
                near_probability: 0.8,
                far_area: Some(SpawnArea::new(300.0, 800.0)),
            },
            Level::Hard => LevelConfig {
                trash_count: 500,
                near_probability: 0.6,
                far_area: Some(SpawnArea::new(500.0, 1000.0)),
            },
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Easy),
            2 => Ok(Level::Medium),
            3 => Ok(Level::Hard),
            other => Err(LevelError::Unknown(other)),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u8 = s
            .trim()
            .parse()
            .map_err(|_| LevelError::NotANumber(s.to_string()))?;
        Level::try_from(id)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trash_counts() {
        assert_eq!(Level::Easy.config().trash_count, 100);
        assert_eq!(Level::Medium.config().trash_count, 250);
        assert_eq!(Level::Hard.config().trash_count, 500);
    }

    #[test]
    fn test_level_ids_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::try_from(level.id()), Ok(level));
        }
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert_eq!(Level::try_from(0), Err(LevelError::Unknown(0)));
        assert_eq!(Level::try_from(4), Err(LevelError::Unknown(4)));
        assert_eq!(
            "abc".parse::<Level>(),
            Err(LevelError::NotANumber("abc".to_string()))
        );
        assert_eq!(" 2 ".parse::<Level>(), Ok(Level::Medium));
    }

    #[test]
    fn test_spawn_area_bounds_are_inclusive() {
        assert!(NEAR_AREA.contains(100.0, -100.0));
        assert!(!NEAR_AREA.contains(100.5, 0.0));
    }
}
