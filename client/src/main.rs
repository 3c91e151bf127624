mod assets;
mod camera;
mod constants;
mod game;
mod input;
mod shaders;
mod ui;
mod world;

use std::collections::BTreeMap;
use std::time::Duration;

use bevy::{prelude::*, window::PresentMode};
use clap::Parser;
use input::keyboard::get_bindings;
use serde::{Deserialize, Serialize};
use shared::{boat::BoatAction, get_game_folder_paths, level::Level, DEFAULT_LOAD_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, help = "Folder holding user settings such as key bindings")]
    game_folder_path: Option<String>,

    #[arg(
        short,
        long,
        help = "Allows overriding of the asset folder path, defaults to ./assets"
    )]
    assets_folder_path: Option<String>,

    #[arg(short, long, help = "Start directly on level 1, 2 or 3, skipping the menu")]
    level: Option<Level>,

    #[arg(long, default_value_t = DEFAULT_LOAD_TIMEOUT_SECS, help = "Seconds to wait for models and textures before giving up")]
    load_timeout_secs: u64,
}

// Enum that will be used as a global state for the game
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    Loading,
    Menu,
    Playing,
    Won,
    Lost,
    LoadFailed,
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KeyMap {
    #[serde(default = "input::keyboard::default_key_map")]
    pub map: BTreeMap<BoatAction, Vec<KeyCode>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: input::keyboard::default_key_map(),
        }
    }
}

/// Level picked on the start menu (or on the command line) for the next session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLevel(pub Level);

/// Level requested with `--level`, consumed once loading finishes.
#[derive(Resource, Debug, Default)]
pub struct StartupLevel(pub Option<Level>);

#[derive(Resource, Debug, Clone, Copy)]
pub struct LoadTimeout(pub Duration);

fn main() {
    let args = Args::parse();

    let game_folder_paths = get_game_folder_paths(args.game_folder_path, args.assets_folder_path);

    println!(
        "Starting application with game folder: {}, assets: {}",
        game_folder_paths.game_folder_path.display(),
        game_folder_paths.assets_folder_path.display()
    );

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(AssetPlugin {
                file_path: game_folder_paths
                    .assets_folder_path
                    .to_string_lossy()
                    .into_owned(),
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Ocean Cleanup".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
    );

    app.insert_resource(get_bindings(&game_folder_paths))
        .insert_resource(StartupLevel(args.level))
        .insert_resource(LoadTimeout(Duration::from_secs(args.load_timeout_secs)))
        .insert_resource(game_folder_paths)
        // Declare the game state, whose starting value is determined by the `Default` trait
        .init_state::<GameState>()
        .enable_state_scoped_entities::<GameState>()
        .add_plugins((
            shaders::OceanWaterPlugin,
            world::environment_plugin,
            camera::camera_plugin,
            assets::loading_plugin,
            ui::menus::menu_plugin,
            game::game_plugin,
            ui::GameUiPlugin,
        ))
        .run();
}
