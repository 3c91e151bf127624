//! Mirrors session state onto the rendered world.

use bevy::{platform::collections::HashMap, prelude::*};
use shared::session::{GameInput, GameSession, Outcome, SessionEffect, TrashId};

use crate::GameState;

#[derive(Component)]
pub struct BoatModel;

#[derive(Component, Debug, Clone, Copy)]
pub struct TrashModel;

/// Entity spawned for each live trash object.
#[derive(Resource, Debug, Default)]
pub struct TrashEntities(pub HashMap<TrashId, Entity>);

/// The single reducer: every state change goes through `GameSession::apply`.
pub fn run_session(
    mut session: ResMut<GameSession>,
    mut inputs: EventReader<GameInput>,
    mut effects: EventWriter<SessionEffect>,
) {
    for input in inputs.read() {
        effects.write_batch(session.apply(*input));
    }
}

pub fn despawn_collected_trash(
    mut commands: Commands,
    mut effects: EventReader<SessionEffect>,
    mut entities: ResMut<TrashEntities>,
) {
    for effect in effects.read() {
        let SessionEffect::TrashCollected(id) = effect else {
            continue;
        };
        match entities.0.remove(id) {
            Some(entity) => {
                debug!("Collected trash {:?}", id);
                commands.entity(entity).despawn();
            }
            None => warn!("Collected trash {:?} has no entity", id),
        }
    }
}

pub fn sync_boat_transform(
    session: Res<GameSession>,
    mut boats: Query<&mut Transform, With<BoatModel>>,
) {
    if !session.is_changed() {
        return;
    }

    let boat = session.boat();
    for mut transform in &mut boats {
        transform.translation = boat.position;
        transform.rotation = boat.rotation();
    }
}

pub fn apply_outcome(
    mut effects: EventReader<SessionEffect>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for effect in effects.read() {
        if let SessionEffect::Finished(outcome) = effect {
            next_state.set(match outcome {
                Outcome::Won => GameState::Won,
                Outcome::Lost => GameState::Lost,
            });
        }
    }
}
