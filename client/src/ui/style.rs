use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node, UiRect, Val};

// Common styles for buttons
pub const NORMAL_BUTTON: Color = Color::srgb(0.08, 0.32, 0.42);
pub const HOVERED_BUTTON: Color = Color::srgb(0.12, 0.42, 0.54);
pub const PRESSED_BUTTON: Color = Color::srgb(0.05, 0.22, 0.3);

// Screen backgrounds
pub const MENU_OVERLAY_COLOR: Color = Color::srgba(0.0, 0.05, 0.1, 0.55);
pub const WIN_BACKGROUND_COLOR: Color = Color::srgb(63.0 / 255.0, 136.0 / 255.0, 87.0 / 255.0);
pub const LOSS_BACKGROUND_COLOR: Color = Color::srgb(0.12, 0.12, 0.14);
pub const HUD_BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);

// Common text colors
pub const TEXT_COLOR: Color = Color::WHITE;
pub const SECONDARY_TEXT_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// 4rem on a 16px root, the size of the end screen headings
pub const HEADING_FONT_SIZE: f32 = 64.0;
pub const TITLE_FONT_SIZE: f32 = 48.0;
/// Default font size for menu text
pub const MENU_FONT_SIZE: f32 = 24.0;
pub const HUD_FONT_SIZE: f32 = 28.0;

pub fn big_button_style() -> Node {
    Node {
        width: Val::Px(320.0),
        height: Val::Px(60.0),
        margin: UiRect::all(Val::Px(12.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        border: UiRect::all(Val::Px(2.)),
        ..Default::default()
    }
}

/// Full-window centered column, used by every screen that replaces the view.
pub fn full_screen_style() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(16.0),
        ..Default::default()
    }
}

pub fn text_font(font_size: f32) -> TextFont {
    TextFont {
        font_size,
        ..Default::default()
    }
}

pub fn white_text_color() -> TextColor {
    TextColor(TEXT_COLOR)
}

pub fn secondary_text_color() -> TextColor {
    TextColor(SECONDARY_TEXT_COLOR)
}

/// Colors every button by its interaction state.
pub fn button_colors_system(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut background) in &mut buttons {
        *background = match *interaction {
            Interaction::Pressed => PRESSED_BUTTON.into(),
            Interaction::Hovered => HOVERED_BUTTON.into(),
            Interaction::None => NORMAL_BUTTON.into(),
        };
    }
}

/// Spawns a styled button with a text label as a child of `parent`.
pub fn spawn_button(parent: &mut ChildSpawnerCommands, label: &str, action: impl Bundle) {
    parent
        .spawn((
            Button,
            big_button_style(),
            BorderColor(Color::BLACK),
            BackgroundColor(NORMAL_BUTTON),
            action,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                text_font(MENU_FONT_SIZE),
                white_text_color(),
            ));
        });
}
