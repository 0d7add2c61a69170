//! Movement domain: components and physics layers for the skater.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the skater rides on (ground, carousel, red-green pad, rails)
    Surface,
    /// Player character
    Player,
    /// Death pits and the finish line
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Camera whose horizontal axes steer the skater
#[derive(Component, Debug)]
pub struct PlayerCamera;

/// Marker for the board mesh that turns while grinding
#[derive(Component, Debug)]
pub struct BoardVisual;

/// Marker for the character body mesh
#[derive(Component, Debug)]
pub struct CharacterModel;

/// Child entities of a skater, wired at spawn time.
/// Either may be absent; grind visuals then do nothing.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SkaterRig {
    pub board: Option<Entity>,
    pub model: Option<Entity>,
}
