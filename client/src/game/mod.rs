pub mod producers;
pub mod sync;

use bevy::{platform::collections::HashMap, prelude::*};
use shared::{
    boat::Boat,
    session::{GameInput, GameSession, SessionEffect},
    sets::{GameOnEnterSet, GameUpdateSet},
    BOAT_SCALE, TRASH_SCALE,
};

use crate::{assets::GameAssets, GameState, SelectedLevel};
use producers::{frame_producer, keyboard_producer, second_producer, FrameSteps, SessionClock};
use sync::{
    apply_outcome, despawn_collected_trash, run_session, sync_boat_transform, BoatModel,
    TrashEntities, TrashModel,
};

fn boat_transform(boat: &Boat) -> Transform {
    Transform::from_translation(boat.position)
        .with_rotation(boat.rotation())
        .with_scale(Vec3::splat(BOAT_SCALE))
}

/// Builds the session for the selected level and spawns its entities.
fn start_session(
    mut commands: Commands,
    selected_level: Option<Res<SelectedLevel>>,
    game_assets: Res<GameAssets>,
) {
    let level = selected_level.map(|selected| selected.0).unwrap_or_default();
    let session = GameSession::start(level, &mut rand::thread_rng());

    commands.spawn((
        Name::new("Boat"),
        StateScoped(GameState::Playing),
        BoatModel,
        SceneRoot(game_assets.boat.clone()),
        boat_transform(session.boat()),
    ));

    let mut entities = HashMap::default();
    for trash in session.trash() {
        let entity = commands
            .spawn((
                Name::new("Trash"),
                StateScoped(GameState::Playing),
                TrashModel,
                SceneRoot(game_assets.trash.clone()),
                Transform::from_translation(trash.position)
                    .with_scale(Vec3::splat(TRASH_SCALE)),
            ))
            .id();
        entities.insert(trash.id, entity);
    }

    commands.insert_resource(TrashEntities(entities));
    commands.insert_resource(session);
    commands.insert_resource(SessionClock::default());
    commands.insert_resource(FrameSteps::default());
}

/// The session only lives while playing; entities go with `StateScoped`.
fn end_session(mut commands: Commands, session: Option<Res<GameSession>>) {
    if let Some(session) = session {
        info!(
            "Leaving session on level {} ({:?})",
            session.level(),
            session.phase()
        );
    }
    commands.remove_resource::<GameSession>();
    commands.remove_resource::<TrashEntities>();
    commands.remove_resource::<SessionClock>();
    commands.remove_resource::<FrameSteps>();
}

pub fn game_plugin(app: &mut App) {
    app.add_event::<GameInput>()
        .add_event::<SessionEffect>()
        .configure_sets(
            Update,
            (
                GameUpdateSet::Input,
                GameUpdateSet::Simulation,
                GameUpdateSet::Sync,
                GameUpdateSet::Ui,
            )
                .chain()
                .run_if(in_state(GameState::Playing).and(resource_exists::<GameSession>)),
        )
        .configure_sets(
            OnEnter(GameState::Playing),
            (GameOnEnterSet::Session, GameOnEnterSet::Ui).chain(),
        )
        .add_systems(
            OnEnter(GameState::Playing),
            start_session.in_set(GameOnEnterSet::Session),
        )
        .add_systems(OnExit(GameState::Playing), end_session)
        .add_systems(
            Update,
            (
                // Delivery order into the reducer: keys, then seconds, then frames.
                (keyboard_producer, second_producer, frame_producer)
                    .chain()
                    .in_set(GameUpdateSet::Input),
                run_session.in_set(GameUpdateSet::Simulation),
                (despawn_collected_trash, sync_boat_transform, apply_outcome)
                    .in_set(GameUpdateSet::Sync),
            ),
        );
}
