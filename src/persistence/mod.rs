//! Persistence domain: saving and restoring the skater's stats.

mod store;

pub use store::{
    MemoryStatsStore, PersistedStats, PrefsFileStore, StatsStore, StatsStoreError, load_into,
};

use bevy::prelude::*;

use crate::content::SkaterConfig;
use crate::core::GameState;
use crate::movement::{Player, SkaterInput, SkaterSet};

/// Stats attached to the live skater entity
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerStats(pub PersistedStats);

/// The active persistence backend
#[derive(Resource)]
pub struct StatsBackend(pub Box<dyn StatsStore>);

impl StatsBackend {
    pub fn memory() -> Self {
        Self(Box::new(MemoryStatsStore::default()))
    }

    /// Load saved stats into `stats`, logging the outcome.
    /// Errors leave `stats` untouched.
    pub fn restore(&self, stats: &mut PersistedStats) {
        match load_into(self.0.as_ref(), stats) {
            Ok(true) => info!(
                "Player data loaded: name={}, health={}, gauge={}",
                stats.player_name, stats.health, stats.special_move_gauge
            ),
            Ok(false) => debug!("No saved player data, keeping defaults"),
            Err(e) => warn!("Failed to load player data: {}", e),
        }
    }
}

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(StatsBackend::memory())
            .add_systems(Startup, open_stats_backend)
            .add_systems(
                Update,
                handle_save_load_input
                    .in_set(SkaterSet::Actions)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn open_stats_backend(config: Res<SkaterConfig>, mut backend: ResMut<StatsBackend>) {
    let store = PrefsFileStore::new(&config.save_file);
    info!("Player data file: {}", store.path().display());
    *backend = StatsBackend(Box::new(store));
}

pub(crate) fn handle_save_load_input(
    input: Res<SkaterInput>,
    mut backend: ResMut<StatsBackend>,
    mut query: Query<&mut PlayerStats, With<Player>>,
) {
    if !input.save_just_pressed && !input.load_just_pressed {
        return;
    }

    for mut stats in &mut query {
        if input.save_just_pressed {
            match backend.0.save(&stats.0) {
                Ok(()) => info!("Player data saved!"),
                Err(e) => warn!("Failed to save player data: {}", e),
            }
        }

        if input.load_just_pressed {
            backend.restore(&mut stats.0);
        }
    }
}
