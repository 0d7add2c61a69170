//! Core domain: requests sent to the run-level collaborators.

use bevy::ecs::message::Message;

/// Scene name that ends the run
pub const END_MENU_SCENE: &str = "EndMenu";

/// Fired once when the skater dies; the park spawner answers it
#[derive(Debug)]
pub struct RespawnPlayerEvent;

impl Message for RespawnPlayerEvent {}

/// Fired when gameplay asks for a scene change
#[derive(Debug)]
pub struct LoadSceneEvent {
    pub scene: String,
}

impl Message for LoadSceneEvent {}
