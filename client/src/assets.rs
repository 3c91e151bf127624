//! Model and texture loading with an explicit failure/timeout contract.
//!
//! Every handle is requested once at boot and kept in [`GameAssets`], so later
//! sessions reuse the cached boat and trash scenes. While in
//! [`GameState::Loading`] the load states are polled each frame; the game
//! moves on when everything is ready, and to [`GameState::LoadFailed`] when
//! any file fails or the timeout elapses first.

use std::time::Duration;

use bevy::{
    asset::{RecursiveDependencyLoadState, UntypedAssetId},
    image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor},
    prelude::*,
};
use shared::{BOAT_SCENE_PATH, TRASH_SCENE_PATH, WATER_NORMALS_PATH};
use thiserror::Error;

use crate::{GameState, LoadTimeout, SelectedLevel, StartupLevel};

#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub boat: Handle<Scene>,
    /// Shared template every trash entity instantiates.
    pub trash: Handle<Scene>,
    pub water_normals: Handle<Image>,
}

impl GameAssets {
    fn entries(&self) -> [(&'static str, UntypedAssetId); 3] {
        [
            (BOAT_SCENE_PATH, self.boat.id().untyped()),
            (TRASH_SCENE_PATH, self.trash.id().untyped()),
            (WATER_NORMALS_PATH, self.water_normals.id().untyped()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameAssetError {
    #[error("failed to load {path}: {reason}")]
    Failed { path: String, reason: String },
    #[error("timed out after {after:?} waiting for {}", .pending.join(", "))]
    TimedOut {
        pending: Vec<String>,
        after: Duration,
    },
}

/// Set while in [`GameState::LoadFailed`] so the failure screen can show it.
#[derive(Resource, Debug, Clone)]
pub struct LoadFailure(pub GameAssetError);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryState {
    Pending,
    Loaded,
    Failed(String),
}

impl From<Option<RecursiveDependencyLoadState>> for EntryState {
    fn from(state: Option<RecursiveDependencyLoadState>) -> Self {
        match state {
            Some(RecursiveDependencyLoadState::Loaded) => EntryState::Loaded,
            Some(RecursiveDependencyLoadState::Failed(err)) => EntryState::Failed(err.to_string()),
            _ => EntryState::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Ready,
}

/// Decides where loading stands. Failures win over the timeout, and the
/// timeout only matters while something is still pending.
pub fn evaluate_load(
    entries: &[(&str, EntryState)],
    elapsed: Duration,
    timeout: Duration,
) -> Result<LoadStatus, GameAssetError> {
    if let Some((path, EntryState::Failed(reason))) = entries
        .iter()
        .find(|(_, state)| matches!(state, EntryState::Failed(_)))
    {
        return Err(GameAssetError::Failed {
            path: path.to_string(),
            reason: reason.clone(),
        });
    }

    let pending: Vec<String> = entries
        .iter()
        .filter(|(_, state)| *state == EntryState::Pending)
        .map(|(path, _)| path.to_string())
        .collect();

    if pending.is_empty() {
        Ok(LoadStatus::Ready)
    } else if elapsed >= timeout {
        Err(GameAssetError::TimedOut {
            pending,
            after: timeout,
        })
    } else {
        Ok(LoadStatus::Pending)
    }
}

#[derive(Resource, Default)]
struct LoadStopwatch {
    elapsed: Duration,
}

pub(crate) fn request_game_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let water_normals = asset_server.load_with_settings(
        WATER_NORMALS_PATH,
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..ImageSamplerDescriptor::linear()
            });
        },
    );

    commands.insert_resource(GameAssets {
        boat: asset_server.load(GltfAssetLabel::Scene(0).from_asset(BOAT_SCENE_PATH)),
        trash: asset_server.load(GltfAssetLabel::Scene(0).from_asset(TRASH_SCENE_PATH)),
        water_normals,
    });
    commands.insert_resource(LoadStopwatch::default());
    info!("Requested boat, trash and water assets");
}

fn track_asset_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    game_assets: Res<GameAssets>,
    timeout: Res<LoadTimeout>,
    time: Res<Time>,
    mut stopwatch: ResMut<LoadStopwatch>,
    mut startup_level: ResMut<StartupLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    stopwatch.elapsed += time.delta();

    let entries: Vec<(&str, EntryState)> = game_assets
        .entries()
        .into_iter()
        .map(|(path, id)| {
            (
                path,
                EntryState::from(asset_server.get_recursive_dependency_load_state(id)),
            )
        })
        .collect();

    match evaluate_load(&entries, stopwatch.elapsed, timeout.0) {
        Ok(LoadStatus::Pending) => {}
        Ok(LoadStatus::Ready) => {
            info!("Assets ready after {:?}", stopwatch.elapsed);
            commands.remove_resource::<LoadStopwatch>();
            if let Some(level) = startup_level.0.take() {
                info!("Skipping menu, starting level {}", level);
                commands.insert_resource(SelectedLevel(level));
                next_state.set(GameState::Playing);
            } else {
                next_state.set(GameState::Menu);
            }
        }
        Err(err) => {
            error!("Asset loading failed: {}", err);
            commands.remove_resource::<LoadStopwatch>();
            commands.insert_resource(LoadFailure(err));
            next_state.set(GameState::LoadFailed);
        }
    }
}

pub fn loading_plugin(app: &mut App) {
    app.add_systems(Startup, request_game_assets).add_systems(
        Update,
        track_asset_loading.run_if(in_state(GameState::Loading)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[test]
    fn test_all_loaded_is_ready() {
        let entries = [("a", EntryState::Loaded), ("b", EntryState::Loaded)];
        assert_eq!(
            evaluate_load(&entries, Duration::from_secs(1), TIMEOUT),
            Ok(LoadStatus::Ready)
        );
    }

    #[test]
    fn test_pending_before_timeout_keeps_waiting() {
        let entries = [("a", EntryState::Loaded), ("b", EntryState::Pending)];
        assert_eq!(
            evaluate_load(&entries, Duration::from_secs(29), TIMEOUT),
            Ok(LoadStatus::Pending)
        );
    }

    #[test]
    fn test_pending_after_timeout_fails() {
        let entries = [("a", EntryState::Pending), ("b", EntryState::Loaded)];
        let err = evaluate_load(&entries, TIMEOUT, TIMEOUT).unwrap_err();
        assert_eq!(
            err,
            GameAssetError::TimedOut {
                pending: vec!["a".to_string()],
                after: TIMEOUT,
            }
        );
        assert!(err.to_string().contains("waiting for a"));
    }

    #[test]
    fn test_failure_is_reported_immediately() {
        let entries = [
            ("a", EntryState::Pending),
            ("boat/scene.gltf", EntryState::Failed("not found".to_string())),
        ];
        let err = evaluate_load(&entries, Duration::ZERO, TIMEOUT).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to load boat/scene.gltf: not found"
        );
    }

    #[test]
    fn test_entries_track_every_requested_asset() {
        let game_assets = GameAssets {
            boat: Handle::default(),
            trash: Handle::default(),
            water_normals: Handle::default(),
        };
        let paths: Vec<&str> = game_assets
            .entries()
            .iter()
            .map(|(path, _)| *path)
            .collect();
        assert_eq!(
            paths,
            vec![BOAT_SCENE_PATH, TRASH_SCENE_PATH, WATER_NORMALS_PATH]
        );
        assert_eq!(game_assets.entries()[2].1, game_assets.water_normals.id().untyped());
    }

    #[test]
    fn test_loaded_entries_ignore_timeout() {
        let entries = [("a", EntryState::Loaded)];
        assert_eq!(
            evaluate_load(&entries, TIMEOUT * 2, TIMEOUT),
            Ok(LoadStatus::Ready)
        );
    }
}
