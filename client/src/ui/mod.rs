pub mod hud;
pub mod menus;
pub mod screens;
pub mod style;

use bevy::prelude::*;
use shared::sets::{GameOnEnterSet, GameUpdateSet};

use crate::{
    ui::{
        hud::{hud_text_update_system, setup_hud},
        screens::{
            play_again_action, setup_load_failed_screen, setup_loss_screen, setup_win_screen,
        },
        style::button_colors_system,
    },
    GameState,
};

pub struct GameUiPlugin;
impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            setup_hud.in_set(GameOnEnterSet::Ui),
        )
        .add_systems(OnEnter(GameState::Won), setup_win_screen)
        .add_systems(OnEnter(GameState::Lost), setup_loss_screen)
        .add_systems(OnEnter(GameState::LoadFailed), setup_load_failed_screen)
        .add_systems(
            Update,
            (
                hud_text_update_system.in_set(GameUpdateSet::Ui),
                button_colors_system,
                play_again_action.run_if(in_state(GameState::Won).or(in_state(GameState::Lost))),
            ),
        );
    }
}
