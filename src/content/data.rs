//! Data definitions for the skater config file.
//!
//! These structs mirror the structure in assets/data/skater.ron and are used
//! for deserialization. Missing fields fall back to the compiled-in defaults,
//! which match the shipped file.

use serde::{Deserialize, Serialize};

use crate::persistence::PersistedStats;

// ============================================================================
// Skater config (skater.ron)
// ============================================================================

#[derive(bevy::prelude::Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SkaterConfig {
    pub movement: MovementDef,
    pub zones: ZoneSpeedsDef,
    /// World positions the skater can spawn at. The first one is used for the
    /// initial spawn, respawns pick randomly.
    pub spawn_points: Vec<[f32; 3]>,
    pub respawn_seed: u64,
    pub skater_kind: SkaterKind,
    /// Path of the key-value stats file, relative to the working directory
    pub save_file: String,
    /// In-memory stats used when nothing has been saved yet
    pub default_stats: PersistedStats,
}

impl Default for SkaterConfig {
    fn default() -> Self {
        Self {
            movement: MovementDef::default(),
            zones: ZoneSpeedsDef::default(),
            spawn_points: vec![[0.0, 1.5, 8.0]],
            respawn_seed: 7,
            skater_kind: SkaterKind::default(),
            save_file: "saves/player_prefs.json".to_string(),
            default_stats: PersistedStats::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub rotation_speed: f32,
    /// Vertical impulse applied once per jump
    pub jump_impulse: f32,
    pub body_mass: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            walk_speed: 3.5,
            sprint_speed: 5.5,
            rotation_speed: 4.0,
            jump_impulse: 5.0,
            body_mass: 1.0,
        }
    }
}

// ============================================================================
// Zone speed overrides
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SpeedPairDef {
    pub walk: f32,
    pub sprint: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ZoneSpeedsDef {
    pub carousel: SpeedPairDef,
    pub red_green: SpeedPairDef,
    pub revert_delay_secs: f32,
}

impl Default for ZoneSpeedsDef {
    fn default() -> Self {
        Self {
            carousel: SpeedPairDef {
                walk: 2.5,
                sprint: 4.0,
            },
            red_green: SpeedPairDef {
                walk: 1.5,
                sprint: 3.0,
            },
            revert_delay_secs: 2.0,
        }
    }
}

// ============================================================================
// Skater variants
// ============================================================================

/// Which character variant is played. Each variant brings its own special move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SkaterKind {
    #[default]
    Kickflipper,
    Slider,
}
