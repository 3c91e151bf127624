//! Trash placement for a level.

use bevy::math::Vec3;
use bevy_log::debug;
use rand::Rng;

use crate::constants::TRASH_HEIGHT;
use crate::level::{Level, LevelConfig, SpawnArea, NEAR_AREA};
use crate::session::{Trash, TrashId};

fn sample_in_area<R: Rng + ?Sized>(area: SpawnArea, rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-area.half_x..=area.half_x),
        TRASH_HEIGHT,
        rng.gen_range(-area.half_z..=area.half_z),
    )
}

/// Picks the box one trash object is drawn from: [`NEAR_AREA`] with the
/// level's near probability, its far area otherwise.
pub fn choose_area<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> SpawnArea {
    match config.far_area {
        Some(far) if !rng.gen_bool(config.near_probability) => far,
        _ => NEAR_AREA,
    }
}

/// Draws one position from the level's piecewise distribution.
pub fn sample_position<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> Vec3 {
    let area = choose_area(config, rng);
    sample_in_area(area, rng)
}

/// Produces exactly `trash_count` trash objects for `level`, with ids
/// assigned sequentially from zero.
pub fn spawn_trash<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Vec<Trash> {
    let config = level.config();
    let trash: Vec<Trash> = (0..config.trash_count)
        .map(|i| Trash {
            id: TrashId(i as u32),
            position: sample_position(&config, rng),
        })
        .collect();

    debug!(
        "Spawned {} trash objects for level {}",
        trash.len(),
        level.id()
    );
    trash
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn in_area(area: SpawnArea, p: Vec3) -> bool {
        area.contains(p.x, p.z)
    }

    #[test]
    fn test_spawn_counts_per_level() {
        let mut rng = StdRng::seed_from_u64(7);
        for level in Level::ALL {
            let trash = spawn_trash(level, &mut rng);
            assert_eq!(trash.len(), level.config().trash_count);
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(1);
        let trash = spawn_trash(Level::Medium, &mut rng);
        for (i, t) in trash.iter().enumerate() {
            assert_eq!(t.id, TrashId(i as u32));
        }
    }

    #[test]
    fn test_level_one_stays_in_near_box() {
        let mut rng = StdRng::seed_from_u64(42);
        for t in spawn_trash(Level::Easy, &mut rng) {
            assert!(in_area(NEAR_AREA, t.position), "{:?}", t.position);
            assert_eq!(t.position.y, TRASH_HEIGHT);
        }
    }

    #[test]
    fn test_levels_two_and_three_stay_in_declared_boxes() {
        let mut rng = StdRng::seed_from_u64(1234);
        for level in [Level::Medium, Level::Hard] {
            let far = level.config().far_area.expect("level has a far area");
            for t in spawn_trash(level, &mut rng) {
                assert!(
                    in_area(NEAR_AREA, t.position) || in_area(far, t.position),
                    "{:?} outside both boxes for level {}",
                    t.position,
                    level
                );
            }
        }
    }

    #[test]
    fn test_near_area_share_matches_level() {
        const DRAWS: usize = 50_000;
        let mut rng = StdRng::seed_from_u64(2024);
        for (level, expected) in [(Level::Medium, 0.8), (Level::Hard, 0.6)] {
            let config = level.config();
            let near = (0..DRAWS)
                .filter(|_| choose_area(&config, &mut rng) == NEAR_AREA)
                .count();
            let share = near as f64 / DRAWS as f64;
            assert!(
                (share - expected).abs() < 0.02,
                "level {} drew {:.3} near, expected {}",
                level,
                share,
                expected
            );
        }
    }

    #[test]
    fn test_easy_level_always_draws_near() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = Level::Easy.config();
        assert!((0..1_000).all(|_| choose_area(&config, &mut rng) == NEAR_AREA));
    }

    #[test]
    fn test_hard_level_reaches_far_area() {
        let mut rng = StdRng::seed_from_u64(99);
        let trash = spawn_trash(Level::Hard, &mut rng);
        // With 40% of 500 objects drawn from a much larger box, some must land
        // outside the near box.
        assert!(trash.iter().any(|t| !in_area(NEAR_AREA, t.position)));
    }
}
