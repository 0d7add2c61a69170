//! Movement domain: the skater controller component.
//!
//! `Skater` owns everything one character instance mutates: locomotion flags,
//! speed profile, grind pose. Every entry point is a no-op once the skater
//! has hit a death zone, so events queued behind the despawn can't touch it.

use bevy::prelude::*;
use std::time::Duration;

use crate::movement::contact::{ContactReaction, ZoneKind};
use crate::movement::grind::{GrindPose, board_orientation};
use crate::movement::locomotion::{LocomotionState, step_motion};
use crate::movement::speed::{SpeedProfile, ZoneSpeeds};

#[derive(Component, Debug, Clone)]
pub struct Skater {
    locomotion: LocomotionState,
    speed: SpeedProfile,
    terminated: bool,
}

impl Skater {
    pub fn new(walk_speed: f32, sprint_speed: f32, heading: Quat) -> Self {
        Self {
            locomotion: LocomotionState::new(heading),
            speed: SpeedProfile::new(walk_speed, sprint_speed),
            terminated: false,
        }
    }

    pub fn locomotion(&self) -> &LocomotionState {
        &self.locomotion
    }

    pub fn speed(&self) -> &SpeedProfile {
        &self.speed
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Move and rotate `body` for one tick.
    pub fn tick_motion(
        &mut self,
        body: &mut Transform,
        direction: Vec3,
        sprint: bool,
        rotation_speed: f32,
        dt: f32,
    ) -> bool {
        if self.terminated {
            return false;
        }
        let speed = self.speed.chosen_speed(sprint);
        step_motion(
            &mut self.locomotion,
            body,
            direction,
            speed,
            rotation_speed,
            dt,
        )
    }

    pub fn try_jump(&mut self) -> bool {
        !self.terminated && self.locomotion.try_jump()
    }

    pub fn on_contact_begin(&mut self, zone: ZoneKind) -> ContactReaction {
        if self.terminated {
            return ContactReaction::Ignored;
        }
        let reaction = self.locomotion.on_contact_begin(zone);
        if reaction == ContactReaction::Died {
            self.terminated = true;
            self.speed.cancel_revert();
        }
        reaction
    }

    pub fn on_zone_stay(&mut self, zone: ZoneKind, zones: &ZoneSpeeds) -> bool {
        !self.terminated && self.speed.on_zone_stay(zone, zones)
    }

    pub fn on_zone_exit(&mut self, zone: ZoneKind, zones: &ZoneSpeeds) -> bool {
        !self.terminated && self.speed.on_zone_exit(zone, zones)
    }

    pub fn tick_revert(&mut self, delta: Duration) -> bool {
        !self.terminated && self.speed.tick(delta)
    }

    /// Switch the grind pose on an input edge.
    ///
    /// Returns the new board world rotation, or `None` when the pose didn't
    /// change or there is no board to turn.
    pub fn set_grinding(
        &mut self,
        active: bool,
        character_forward: Vec3,
        board_forward: Option<Vec3>,
    ) -> Option<Quat> {
        if self.terminated {
            return None;
        }
        let pose = GrindPose::from_active(active);
        if self.locomotion.grind == pose {
            return None;
        }
        self.locomotion.grind = pose;
        board_orientation(pose, character_forward, board_forward?)
    }

    /// Consume the flip allowance after a flip trick.
    pub fn consume_flip(&mut self) {
        if !self.terminated {
            self.locomotion.can_flip = false;
        }
    }
}
