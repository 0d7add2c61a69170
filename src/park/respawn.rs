//! Park domain: initial spawn and respawn of the skater.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::SkaterConfig;
use crate::core::RespawnPlayerEvent;
use crate::movement::{MovementTuning, spawn_skater};
use crate::park::spawn::ParkEntity;
use crate::persistence::StatsBackend;

/// Positions the skater can (re)spawn at
#[derive(Resource, Debug, Clone)]
pub struct SpawnPoints(pub Vec<Vec3>);

impl SpawnPoints {
    pub fn from_config(config: &SkaterConfig) -> Self {
        Self(config.spawn_points.iter().copied().map(Vec3::from).collect())
    }

    pub fn initial(&self) -> Vec3 {
        self.0.first().copied().unwrap_or(Vec3::Y)
    }
}

/// Seeded RNG for respawn placement
#[derive(Resource)]
pub struct SpawnRng(pub ChaCha8Rng);

impl SpawnRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Pick a respawn position. Falls back to just above the origin if none are configured.
pub fn pick_respawn_point<R: Rng>(points: &SpawnPoints, rng: &mut R) -> Vec3 {
    if points.0.is_empty() {
        return Vec3::Y;
    }
    points.0[rng.random_range(0..points.0.len())]
}

pub(crate) fn setup_spawning(mut commands: Commands, config: Res<SkaterConfig>) {
    commands.insert_resource(SpawnPoints::from_config(&config));
    commands.insert_resource(SpawnRng::from_seed(config.respawn_seed));
}

pub(crate) fn spawn_initial_skater(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
    config: Res<SkaterConfig>,
    backend: Res<StatsBackend>,
    points: Res<SpawnPoints>,
) {
    let skater = spawn_skater(
        &mut commands,
        &mut meshes,
        &mut materials,
        &tuning,
        &config,
        &backend,
        points.initial(),
    );
    commands.entity(skater).insert(ParkEntity);
}

pub(crate) fn respawn_player(
    mut commands: Commands,
    mut events: MessageReader<RespawnPlayerEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
    config: Res<SkaterConfig>,
    backend: Res<StatsBackend>,
    points: Res<SpawnPoints>,
    mut rng: ResMut<SpawnRng>,
) {
    for _ in events.read() {
        let position = pick_respawn_point(&points, &mut rng.0);
        info!("Respawning skater at {:?}", position);
        let skater = spawn_skater(
            &mut commands,
            &mut meshes,
            &mut materials,
            &tuning,
            &config,
            &backend,
            position,
        );
        commands.entity(skater).insert(ParkEntity);
    }
}
