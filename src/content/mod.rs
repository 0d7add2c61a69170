//! Content domain: skater config loading and validation.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{MovementDef, SkaterConfig, SkaterKind, SpeedPairDef, ZoneSpeedsDef};
pub use loader::{ContentLoadError, load_skater_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON data files
const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkaterConfig>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load skater.ron into the SkaterConfig resource.
/// Falls back to the compiled-in defaults if the file is missing or invalid.
fn load_content(mut config: ResMut<SkaterConfig>) {
    let loaded = match load_skater_config(Path::new(DATA_DIR)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}", e);
            warn!("Using default skater config");
            return;
        }
    };

    let errors = validate_config(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Skater config: {}", error);
        }
        warn!(
            "Skater config has {} invalid values, using defaults",
            errors.len()
        );
        return;
    }

    info!(
        "Loaded skater config: kind={:?}, walk={}, sprint={}, spawn_points={}",
        loaded.skater_kind,
        loaded.movement.walk_speed,
        loaded.movement.sprint_speed,
        loaded.spawn_points.len()
    );
    *config = loaded;
}
