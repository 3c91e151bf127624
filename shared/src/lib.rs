use std::path::PathBuf;

use bevy_ecs::resource::Resource;

pub mod boat;
pub mod clock;
pub mod collision;
pub mod constants;
pub mod countdown;
pub mod environment;
pub mod level;
pub mod session;
pub mod sets;
pub mod spawner;

pub use constants::*;

const GAME_FOLDER_NAME: &str = "ocean-cleanup";

#[derive(Resource, Debug, Clone)]
pub struct GameFolderPaths {
    /// Holds user settings such as key bindings
    pub game_folder_path: PathBuf,
    /// Root the asset server resolves model and texture paths against
    pub assets_folder_path: PathBuf,
}

pub fn get_game_folder_paths(
    game_folder_path: Option<String>,
    assets_folder_path: Option<String>,
) -> GameFolderPaths {
    let mut paths = default_game_folder_paths();

    if let Some(game_data) = game_folder_path {
        paths.game_folder_path = game_data.into();
    }
    if let Some(game_assets) = assets_folder_path {
        paths.assets_folder_path = game_assets.into();
    }

    paths
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn default_assets_folder() -> PathBuf {
    PathBuf::from("assets")
}

#[cfg(target_os = "windows")]
pub fn default_game_folder_paths() -> GameFolderPaths {
    let base = env_path("APPDATA").unwrap_or_else(|| PathBuf::from("."));
    GameFolderPaths {
        game_folder_path: base.join(GAME_FOLDER_NAME),
        assets_folder_path: default_assets_folder(),
    }
}

#[cfg(target_os = "macos")]
pub fn default_game_folder_paths() -> GameFolderPaths {
    let base = env_path("HOME").unwrap_or_else(|| PathBuf::from("."));
    GameFolderPaths {
        game_folder_path: base
            .join("Library/Application Support")
            .join(GAME_FOLDER_NAME),
        assets_folder_path: default_assets_folder(),
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn default_game_folder_paths() -> GameFolderPaths {
    let base = env_path("XDG_CONFIG_HOME")
        .or_else(|| env_path("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    GameFolderPaths {
        game_folder_path: base.join(GAME_FOLDER_NAME),
        assets_folder_path: default_assets_folder(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_paths_override_defaults() {
        let paths = get_game_folder_paths(Some("/tmp/game".into()), Some("/tmp/assets".into()));
        assert_eq!(paths.game_folder_path, PathBuf::from("/tmp/game"));
        assert_eq!(paths.assets_folder_path, PathBuf::from("/tmp/assets"));
    }

    #[test]
    fn test_default_paths_end_in_game_folder() {
        let paths = get_game_folder_paths(None, None);
        assert!(paths.game_folder_path.ends_with(GAME_FOLDER_NAME));
        assert_eq!(paths.assets_folder_path, PathBuf::from("assets"));
    }
}
