//! Persistence domain: key-value stats backends.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const KEY_PLAYER_NAME: &str = "PlayerName";
const KEY_HEALTH: &str = "Health";
const KEY_SPECIAL_MOVE_GAUGE: &str = "SpecialMoveGauge";

/// The three stats that survive between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedStats {
    pub player_name: String,
    pub health: f32,
    pub special_move_gauge: f32,
}

impl Default for PersistedStats {
    fn default() -> Self {
        Self {
            player_name: "Skater".to_string(),
            health: 100.0,
            special_move_gauge: 0.0,
        }
    }
}

#[derive(Debug)]
pub enum StatsStoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for StatsStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsStoreError::Io(e) => write!(f, "stats store IO error: {}", e),
            StatsStoreError::Parse(e) => write!(f, "stats store parse error: {}", e),
        }
    }
}

impl std::error::Error for StatsStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsStoreError::Io(e) => Some(e),
            StatsStoreError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StatsStoreError {
    fn from(e: std::io::Error) -> Self {
        StatsStoreError::Io(e)
    }
}

impl From<serde_json::Error> for StatsStoreError {
    fn from(e: serde_json::Error) -> Self {
        StatsStoreError::Parse(e)
    }
}

/// Persistence backend for player stats.
pub trait StatsStore: Send + Sync {
    fn save(&mut self, stats: &PersistedStats) -> Result<(), StatsStoreError>;

    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedStats>, StatsStoreError>;
}

/// Stats kept in memory only. Used by tests and when no save path is usable.
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    saved: Option<PersistedStats>,
}

impl StatsStore for MemoryStatsStore {
    fn save(&mut self, stats: &PersistedStats) -> Result<(), StatsStoreError> {
        self.saved = Some(stats.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedStats>, StatsStoreError> {
        Ok(self.saved.clone())
    }
}

/// Flat key-value file (a JSON object). Keys this store doesn't own are
/// preserved on save.
#[derive(Debug, Clone)]
pub struct PrefsFileStore {
    path: PathBuf,
}

impl PrefsFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Option<Map<String, Value>>, StatsStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }
}

impl StatsStore for PrefsFileStore {
    fn save(&mut self, stats: &PersistedStats) -> Result<(), StatsStoreError> {
        let mut entries = self.read_entries()?.unwrap_or_default();
        entries.insert(
            KEY_PLAYER_NAME.to_string(),
            Value::from(stats.player_name.clone()),
        );
        entries.insert(KEY_HEALTH.to_string(), Value::from(f64::from(stats.health)));
        entries.insert(
            KEY_SPECIAL_MOVE_GAUGE.to_string(),
            Value::from(f64::from(stats.special_move_gauge)),
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedStats>, StatsStoreError> {
        let Some(entries) = self.read_entries()? else {
            return Ok(None);
        };

        // The name key marks a completed save; numeric keys default to zero
        let Some(player_name) = entries.get(KEY_PLAYER_NAME).and_then(Value::as_str) else {
            return Ok(None);
        };
        let float = |key: &str| {
            entries
                .get(key)
                .and_then(Value::as_f64)
                .map(|v| v as f32)
                .unwrap_or(0.0)
        };

        Ok(Some(PersistedStats {
            player_name: player_name.to_string(),
            health: float(KEY_HEALTH),
            special_move_gauge: float(KEY_SPECIAL_MOVE_GAUGE),
        }))
    }
}

/// Overwrite `stats` with whatever the store holds.
/// Returns true if saved data was found; an empty store keeps the current values.
pub fn load_into(
    store: &dyn StatsStore,
    stats: &mut PersistedStats,
) -> Result<bool, StatsStoreError> {
    match store.load()? {
        Some(saved) => {
            *stats = saved;
            Ok(true)
        }
        None => Ok(false),
    }
}
