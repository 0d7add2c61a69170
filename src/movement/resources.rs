//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::SkaterConfig;
use crate::movement::speed::ZoneSpeeds;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub rotation_speed: f32,
    pub jump_impulse: f32,
    pub body_mass: f32,
    pub zones: ZoneSpeeds,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_config(&SkaterConfig::default())
    }
}

impl MovementTuning {
    pub fn from_config(config: &SkaterConfig) -> Self {
        Self {
            walk_speed: config.movement.walk_speed,
            sprint_speed: config.movement.sprint_speed,
            rotation_speed: config.movement.rotation_speed,
            jump_impulse: config.movement.jump_impulse,
            body_mass: config.movement.body_mass,
            zones: ZoneSpeeds::from_def(&config.zones),
        }
    }

    /// Vertical velocity change produced by one jump impulse.
    pub fn jump_velocity(&self) -> f32 {
        self.jump_impulse / self.body_mass
    }
}

/// Camera-relative directional intent, one flag per movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

/// Input sampled once per frame. Gameplay systems only read this resource.
#[derive(Resource, Debug, Default)]
pub struct SkaterInput {
    pub direction: DirectionIntent,
    pub sprint_held: bool,
    pub jump_just_pressed: bool,
    pub grind_just_pressed: bool,
    pub grind_just_released: bool,
    pub save_just_pressed: bool,
    pub load_just_pressed: bool,
    pub special_just_pressed: bool,
}
