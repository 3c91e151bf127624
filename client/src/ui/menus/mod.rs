//! Start menu: one button per difficulty level.

use bevy::prelude::*;
use shared::level::Level;

use crate::ui::style::*;
use crate::{GameState, SelectedLevel};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelButton(pub Level);

pub fn menu_setup(mut commands: Commands) {
    commands
        .spawn((
            Name::new("StartMenu"),
            StateScoped(GameState::Menu),
            full_screen_style(),
            BackgroundColor(MENU_OVERLAY_COLOR),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("Ocean Cleanup"),
                text_font(TITLE_FONT_SIZE),
                white_text_color(),
            ));
            root.spawn((
                Text::new("Escolha a dificuldade"),
                text_font(MENU_FONT_SIZE),
                secondary_text_color(),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            for level in Level::ALL {
                spawn_button(root, level.label(), LevelButton(level));
            }
        });
}

pub fn level_button_action(
    mut commands: Commands,
    buttons: Query<(&Interaction, &LevelButton), (Changed<Interaction>, With<Button>)>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            info!("Starting level {}", button.0);
            commands.insert_resource(SelectedLevel(button.0));
            game_state.set(GameState::Playing);
        }
    }
}

pub fn menu_plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Menu), menu_setup)
        .add_systems(
            Update,
            level_button_action.run_if(in_state(GameState::Menu)),
        );
}
