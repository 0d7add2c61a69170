//! Movement domain: zone speed overrides and their delayed revert.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::{SpeedPairDef, ZoneSpeedsDef};
use crate::movement::contact::ZoneKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedPair {
    pub walk: f32,
    pub sprint: f32,
}

impl From<SpeedPairDef> for SpeedPair {
    fn from(def: SpeedPairDef) -> Self {
        Self {
            walk: def.walk,
            sprint: def.sprint,
        }
    }
}

/// Reduced speeds per modifier zone
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSpeeds {
    pub carousel: SpeedPair,
    pub red_green: SpeedPair,
    pub revert_delay: Duration,
}

impl ZoneSpeeds {
    pub fn from_def(def: &ZoneSpeedsDef) -> Self {
        Self {
            carousel: def.carousel.into(),
            red_green: def.red_green.into(),
            // Validation rejects unusable delays; anything left reverts at once
            revert_delay: Duration::try_from_secs_f32(def.revert_delay_secs)
                .unwrap_or(Duration::ZERO),
        }
    }

    pub fn for_zone(&self, zone: ZoneKind) -> Option<SpeedPair> {
        match zone {
            ZoneKind::Carousel => Some(self.carousel),
            ZoneKind::RedGreenZone => Some(self.red_green),
            _ => None,
        }
    }
}

impl Default for ZoneSpeeds {
    fn default() -> Self {
        Self::from_def(&ZoneSpeedsDef::default())
    }
}

/// Current and base walk/sprint speeds, plus at most one pending revert.
#[derive(Debug, Clone)]
pub struct SpeedProfile {
    base: SpeedPair,
    current: SpeedPair,
    revert: Option<Timer>,
}

impl SpeedProfile {
    pub fn new(walk: f32, sprint: f32) -> Self {
        let base = SpeedPair { walk, sprint };
        Self {
            base,
            current: base,
            revert: None,
        }
    }

    pub fn base(&self) -> SpeedPair {
        self.base
    }

    pub fn current(&self) -> SpeedPair {
        self.current
    }

    pub fn chosen_speed(&self, sprint: bool) -> f32 {
        if sprint {
            self.current.sprint
        } else {
            self.current.walk
        }
    }

    pub fn has_pending_revert(&self) -> bool {
        self.revert.is_some()
    }

    pub fn revert_remaining_secs(&self) -> Option<f32> {
        self.revert.as_ref().map(Timer::remaining_secs)
    }

    /// Drop the pending revert, if any.
    pub fn cancel_revert(&mut self) {
        self.revert = None;
    }

    /// Apply the zone's reduced speeds while overlapping it.
    /// Returns false for zones that don't modify speed.
    pub fn on_zone_stay(&mut self, zone: ZoneKind, zones: &ZoneSpeeds) -> bool {
        let Some(pair) = zones.for_zone(zone) else {
            return false;
        };
        self.current = pair;
        self.cancel_revert();
        true
    }

    /// Schedule the return to base speeds, replacing any pending revert.
    pub fn on_zone_exit(&mut self, zone: ZoneKind, zones: &ZoneSpeeds) -> bool {
        if zones.for_zone(zone).is_none() {
            return false;
        }
        self.revert = Some(Timer::new(zones.revert_delay, TimerMode::Once));
        true
    }

    /// Advance the pending revert. Returns true on the tick it fires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.revert.as_mut() else {
            return false;
        };
        if !timer.tick(delta).just_finished() {
            return false;
        }
        self.current = self.base;
        self.revert = None;
        true
    }
}
