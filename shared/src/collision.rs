use bevy::math::Vec3;

use crate::constants::COLLISION_HALF_EXTENT;

/// Axis-aligned proximity test on the water plane. Height is ignored.
#[inline]
pub fn is_colliding(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < COLLISION_HALF_EXTENT && (a.z - b.z).abs() < COLLISION_HALF_EXTENT
}
