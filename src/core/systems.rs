//! Core domain: run flow systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{END_MENU_SCENE, LoadSceneEvent, RespawnPlayerEvent};
use crate::core::resources::RunClock;
use crate::core::state::GameState;

pub(crate) fn transition_to_playing(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

pub(crate) fn reset_run_clock(mut clock: ResMut<RunClock>) {
    clock.reset();
}

pub(crate) fn tick_run_clock(time: Res<Time>, mut clock: ResMut<RunClock>) {
    clock.elapsed += time.delta();
}

pub(crate) fn count_deaths(
    mut events: MessageReader<RespawnPlayerEvent>,
    mut clock: ResMut<RunClock>,
) {
    clock.deaths += events.read().count() as u32;
}

/// Map a scene name to the state that shows it.
pub(crate) fn scene_state(scene: &str) -> Option<GameState> {
    match scene {
        END_MENU_SCENE => Some(GameState::EndMenu),
        _ => None,
    }
}

pub(crate) fn handle_load_scene(
    mut events: MessageReader<LoadSceneEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        match scene_state(&event.scene) {
            Some(state) => {
                info!("Loading scene '{}'", event.scene);
                game_state.set(state);
            }
            None => warn!("Unknown scene '{}', ignoring", event.scene),
        }
    }
}
