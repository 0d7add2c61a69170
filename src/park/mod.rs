//! Park domain: the skatepark level, respawning and the red-green signal.

mod red_green;
mod respawn;
mod spawn;
#[cfg(test)]
mod tests;

pub use red_green::{RedGreenSignal, StartRedGreenEvent, StopRedGreenEvent};
pub use respawn::{SpawnPoints, SpawnRng, pick_respawn_point};
pub use spawn::ParkEntity;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{SkaterSet, verify_skater_setup};
use crate::park::red_green::{handle_red_green_events, reset_red_green, tick_red_green};
use crate::park::respawn::{respawn_player, setup_spawning, spawn_initial_skater};
use crate::park::spawn::{cleanup_park, follow_player_camera, spawn_park};

pub struct ParkPlugin;

impl Plugin for ParkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RedGreenSignal>()
            .add_message::<StartRedGreenEvent>()
            .add_message::<StopRedGreenEvent>()
            .add_systems(Startup, setup_spawning)
            .add_systems(
                OnEnter(GameState::Playing),
                (
                    reset_red_green,
                    spawn_park,
                    spawn_initial_skater,
                    verify_skater_setup,
                )
                    .chain(),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_park)
            .add_systems(
                Update,
                (
                    tick_red_green,
                    handle_red_green_events,
                    respawn_player,
                    follow_player_camera,
                )
                    .chain()
                    .after(SkaterSet::Actions)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
