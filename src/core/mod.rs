//! Core domain: run state, collaborator requests and the end menu.

mod events;
mod resources;
mod state;
mod systems;
mod ui;

pub use events::{END_MENU_SCENE, LoadSceneEvent, RespawnPlayerEvent};
pub use resources::RunClock;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    count_deaths, handle_load_scene, reset_run_clock, tick_run_clock, transition_to_playing,
};
use crate::core::ui::end_menu::{cleanup_end_menu, handle_end_menu_input, spawn_end_menu};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunClock>()
            .add_message::<RespawnPlayerEvent>()
            .add_message::<LoadSceneEvent>()
            .add_systems(Startup, transition_to_playing)
            .add_systems(OnEnter(GameState::Playing), reset_run_clock)
            .add_systems(
                Update,
                (tick_run_clock, count_deaths).run_if(in_state(GameState::Playing)),
            )
            .add_systems(PostUpdate, handle_load_scene)
            .add_systems(OnEnter(GameState::EndMenu), spawn_end_menu)
            .add_systems(OnExit(GameState::EndMenu), cleanup_end_menu)
            .add_systems(
                Update,
                handle_end_menu_input.run_if(in_state(GameState::EndMenu)),
            );
    }
}
