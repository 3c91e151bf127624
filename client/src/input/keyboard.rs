use crate::{constants::BINDS_PATH, KeyMap};
use bevy::prelude::*;
use ron::{from_str, ser::PrettyConfig};
use shared::{boat::BoatAction, GameFolderPaths};
use std::path::Path;
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

fn write_keybindings_to_path(key_map: &KeyMap, binds_path: &Path) -> Result<(), std::io::Error> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(true);

    let serialized = ron::ser::to_string_pretty(key_map, pretty_config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    if let Some(parent) = binds_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(binds_path)?;
    file.write_all(serialized.as_bytes())
}

/// The action bound to `key_code`, if any. When a key is bound to several
/// actions the first one in action order wins.
pub fn action_for_key(key_map: &KeyMap, key_code: KeyCode) -> Option<BoatAction> {
    key_map
        .map
        .iter()
        .find(|(_, key_codes)| key_codes.contains(&key_code))
        .map(|(action, _)| *action)
}

pub(crate) fn default_key_map() -> BTreeMap<BoatAction, Vec<KeyCode>> {
    let mut map = BTreeMap::new();
    map.insert(BoatAction::Forward, vec![KeyCode::ArrowUp]);
    map.insert(BoatAction::Backward, vec![KeyCode::ArrowDown]);
    map.insert(BoatAction::TurnLeft, vec![KeyCode::ArrowLeft]);
    map.insert(BoatAction::TurnRight, vec![KeyCode::ArrowRight]);
    map
}

fn read_keybindings_from_path(binds_path: &Path) -> Option<KeyMap> {
    let content = match fs::read_to_string(binds_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("No keybindings read from {:?}: {}", binds_path, e);
            return None;
        }
    };

    match from_str::<KeyMap>(&content) {
        Ok(key_map) => Some(key_map),
        Err(e) => {
            warn!("Ignoring malformed keybindings in {:?}: {}", binds_path, e);
            None
        }
    }
}

pub fn get_bindings(game_folder_paths: &GameFolderPaths) -> KeyMap {
    let binds_path: PathBuf = Path::new(&game_folder_paths.game_folder_path).join(BINDS_PATH);

    if let Some(key_map) = read_keybindings_from_path(binds_path.as_path()) {
        info!("Loaded keybindings from {:?}", binds_path);
        return key_map;
    }

    let key_map = KeyMap::default();
    if let Err(e) = write_keybindings_to_path(&key_map, binds_path.as_path()) {
        error!(
            "Failed to create default keybindings file at {:?}: {}",
            binds_path, e
        );
    }
    key_map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_folder(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ocean-cleanup-binds-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn paths_for(dir: &Path) -> GameFolderPaths {
        GameFolderPaths {
            game_folder_path: dir.to_path_buf(),
            assets_folder_path: PathBuf::from("assets"),
        }
    }

    #[test]
    fn test_default_bindings_use_arrow_keys() {
        let key_map = KeyMap::default();
        assert_eq!(
            action_for_key(&key_map, KeyCode::ArrowUp),
            Some(BoatAction::Forward)
        );
        assert_eq!(
            action_for_key(&key_map, KeyCode::ArrowDown),
            Some(BoatAction::Backward)
        );
        assert_eq!(
            action_for_key(&key_map, KeyCode::ArrowLeft),
            Some(BoatAction::TurnLeft)
        );
        assert_eq!(
            action_for_key(&key_map, KeyCode::ArrowRight),
            Some(BoatAction::TurnRight)
        );
        assert_eq!(action_for_key(&key_map, KeyCode::KeyW), None);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = scratch_folder("missing");
        let key_map = get_bindings(&paths_for(&dir));
        assert_eq!(key_map, KeyMap::default());
        assert!(dir.join(BINDS_PATH).exists());

        // The file written above is read back on the next start.
        assert_eq!(get_bindings(&paths_for(&dir)), KeyMap::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_custom_bindings_are_loaded() {
        let dir = scratch_folder("custom");
        let mut custom = KeyMap::default();
        custom
            .map
            .insert(BoatAction::Forward, vec![KeyCode::KeyW, KeyCode::ArrowUp]);
        write_keybindings_to_path(&custom, &dir.join(BINDS_PATH)).unwrap();

        let key_map = get_bindings(&paths_for(&dir));
        assert_eq!(key_map, custom);
        assert_eq!(
            action_for_key(&key_map, KeyCode::KeyW),
            Some(BoatAction::Forward)
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = scratch_folder("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BINDS_PATH), "not ron at all {").unwrap();

        assert_eq!(get_bindings(&paths_for(&dir)), KeyMap::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
