//! Movement domain: skater spawning and setup checks.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::SkaterConfig;
use crate::movement::{
    BoardVisual, CharacterModel, GameLayer, MovementTuning, Player, PlayerCamera, Skater,
    SkaterRig,
};
use crate::persistence::{PlayerStats, StatsBackend};
use crate::special::SpecialMoveSlot;

/// Scene preconditions that make the game unplayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    MissingCamera,
    MissingRigidBody,
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingCamera => write!(f, "no PlayerCamera in the scene"),
            SetupError::MissingRigidBody => write!(f, "the player has no rigid body"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Check the references the controller can't run without.
pub(crate) fn check_setup(has_camera: bool, has_body: bool) -> Result<(), SetupError> {
    if !has_camera {
        return Err(SetupError::MissingCamera);
    }
    if !has_body {
        return Err(SetupError::MissingRigidBody);
    }
    Ok(())
}

/// Fails the app at setup if the camera or the skater body is missing.
pub(crate) fn verify_skater_setup(
    cameras: Query<(), With<PlayerCamera>>,
    bodies: Query<(), (With<Player>, With<RigidBody>)>,
) -> Result {
    check_setup(!cameras.is_empty(), !bodies.is_empty())?;
    Ok(())
}

/// Spawn a skater at `position` with stats restored from the backend.
pub fn spawn_skater(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    tuning: &MovementTuning,
    config: &SkaterConfig,
    backend: &StatsBackend,
    position: Vec3,
) -> Entity {
    let mut stats = config.default_stats.clone();
    backend.restore(&mut stats);

    let model = commands
        .spawn((
            CharacterModel,
            Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.55, 0.2))),
            Transform::from_xyz(0.0, 0.2, 0.0),
        ))
        .id();

    let board = commands
        .spawn((
            BoardVisual,
            Mesh3d(meshes.add(Cuboid::new(0.3, 0.08, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.25))),
            Transform::from_xyz(0.0, -0.75, 0.0),
        ))
        .id();

    let transform = Transform::from_translation(position);
    let skater = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                Skater::new(tuning.walk_speed, tuning.sprint_speed, transform.rotation),
                SkaterRig {
                    board: Some(board),
                    model: Some(model),
                },
                PlayerStats(stats),
                SpecialMoveSlot::for_kind(config.skater_kind),
            ),
            transform,
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(0.4, 1.0),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(tuning.body_mass),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollidingEntities::default(),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Surface, GameLayer::Sensor, GameLayer::Default],
                ),
            ),
        ))
        .id();

    commands.entity(skater).add_children(&[model, board]);

    info!(
        "Spawned skater {:?} at {:?} (kind={:?})",
        skater, position, config.skater_kind
    );
    skater
}
