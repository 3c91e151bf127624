//! Screens that replace the whole view: win, loss and asset failure.

use bevy::prelude::*;

use crate::assets::LoadFailure;
use crate::ui::style::*;
use crate::GameState;

pub const WIN_MESSAGE: &str = "Parabéns, você ganhou!!!";
pub const LOSS_MESSAGE: &str = "Você perdeu";
pub const LOAD_FAILED_MESSAGE: &str = "Não foi possível carregar o jogo";

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayAgainButton;

fn spawn_end_screen(commands: &mut Commands, state: GameState, message: &str, background: Color) {
    commands
        .spawn((
            Name::new("EndScreen"),
            StateScoped(state),
            full_screen_style(),
            BackgroundColor(background),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(message),
                text_font(HEADING_FONT_SIZE),
                white_text_color(),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
            spawn_button(root, "Jogar novamente", PlayAgainButton);
        });
}

pub fn setup_win_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        GameState::Won,
        WIN_MESSAGE,
        WIN_BACKGROUND_COLOR,
    );
}

pub fn setup_loss_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        GameState::Lost,
        LOSS_MESSAGE,
        LOSS_BACKGROUND_COLOR,
    );
}

pub fn setup_load_failed_screen(mut commands: Commands, failure: Option<Res<LoadFailure>>) {
    let details = failure
        .map(|failure| failure.0.to_string())
        .unwrap_or_default();

    commands
        .spawn((
            Name::new("LoadFailedScreen"),
            StateScoped(GameState::LoadFailed),
            full_screen_style(),
            BackgroundColor(LOSS_BACKGROUND_COLOR),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(LOAD_FAILED_MESSAGE),
                text_font(TITLE_FONT_SIZE),
                white_text_color(),
            ));
            root.spawn((
                Text::new(details),
                text_font(MENU_FONT_SIZE),
                secondary_text_color(),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    max_width: Val::Percent(80.0),
                    ..default()
                },
            ));
        });
}

pub fn play_again_action(
    buttons: Query<&Interaction, (Changed<Interaction>, With<PlayAgainButton>)>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if buttons
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        game_state.set(GameState::Menu);
    }
}
