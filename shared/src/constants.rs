use bevy::math::Vec3;

/// Rate at which the per-frame producer steps the simulation.
pub const FRAMES_PER_SECOND: f32 = 60.0;
/// Upper bound on simulation steps emitted for a single rendered frame.
pub const MAX_FRAME_STEPS_PER_UPDATE: u32 = 4;

/// Half extent of the square used by the boat/trash proximity test.
pub const COLLISION_HALF_EXTENT: f32 = 15.0;

pub const COUNTDOWN_START_MINUTES: u8 = 5;
pub const COUNTDOWN_START_SECONDS: u8 = 0;

/// Seconds between session start and the first collision check.
pub const WARMUP_SECONDS: u32 = 1;

pub const BOAT_SPAWN_POSITION: Vec3 = Vec3::new(5.0, 13.0, 50.0);
pub const BOAT_SPAWN_HEADING: f32 = 1.5;
pub const BOAT_SCALE: f32 = 3.0;
pub const BOAT_FORWARD_SPEED: f32 = 1.0;
pub const BOAT_TURN_RATE: f32 = 0.1;

/// Trash floats slightly below the water plane.
pub const TRASH_HEIGHT: f32 = -0.5;
pub const TRASH_SCALE: f32 = 1.5;

pub const BOAT_SCENE_PATH: &str = "boat/scene.gltf";
pub const TRASH_SCENE_PATH: &str = "trash/scene.gltf";
pub const WATER_NORMALS_PATH: &str = "waternormals.jpg";

pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 30;
