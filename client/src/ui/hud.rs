use bevy::prelude::*;
use shared::{countdown::Countdown, session::GameSession};

use crate::ui::style::*;
use crate::GameState;

#[derive(Component)]
pub struct ClockText;

#[derive(Component)]
pub struct RemainingTrashText;

pub fn remaining_trash_label(remaining: usize) -> String {
    format!("Lixo restante: {remaining}")
}

pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            StateScoped(GameState::Playing),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(HUD_BACKGROUND_COLOR),
        ))
        .with_children(|hud| {
            hud.spawn((
                ClockText,
                Text::new(Countdown::default().to_string()),
                text_font(HUD_FONT_SIZE),
                white_text_color(),
            ));
            hud.spawn((
                RemainingTrashText,
                Text::new(String::new()),
                text_font(MENU_FONT_SIZE),
                secondary_text_color(),
            ));
        });
}

pub fn hud_text_update_system(
    session: Res<GameSession>,
    clock_query: Query<Entity, With<ClockText>>,
    trash_query: Query<Entity, With<RemainingTrashText>>,
    mut writer: TextUiWriter,
) {
    if !session.is_changed() {
        return;
    }

    for entity in clock_query.iter() {
        *writer.text(entity, 0) = session.countdown().to_string();
    }
    for entity in trash_query.iter() {
        *writer.text(entity, 0) = remaining_trash_label(session.remaining_trash());
    }
}
