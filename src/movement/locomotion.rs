//! Movement domain: locomotion state and camera-relative steering.

use bevy::prelude::*;

use crate::movement::grind::GrindPose;
use crate::movement::resources::DirectionIntent;

/// Per-skater locomotion flags.
///
/// `has_jumped` is only cleared and `can_flip` only set by a Ground contact.
#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionState {
    pub target_heading: Quat,
    pub is_grounded: bool,
    pub has_jumped: bool,
    pub can_flip: bool,
    pub grind: GrindPose,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            target_heading: Quat::IDENTITY,
            is_grounded: false,
            has_jumped: false,
            can_flip: true,
            grind: GrindPose::Normal,
        }
    }
}

impl LocomotionState {
    pub fn new(heading: Quat) -> Self {
        Self {
            target_heading: heading,
            ..default()
        }
    }

    pub fn is_grinding(&self) -> bool {
        self.grind == GrindPose::Grinding
    }

    /// Leave the ground. Returns false (and changes nothing) while airborne.
    pub fn try_jump(&mut self) -> bool {
        if !self.is_grounded {
            return false;
        }
        self.is_grounded = false;
        self.has_jumped = true;
        true
    }
}

/// Project a vector onto the horizontal plane and normalize it.
/// Vertical or zero vectors come back as zero.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Sum of the flattened camera axes selected by `intent`.
///
/// The sum is not re-normalized, so a diagonal is longer than a single axis.
pub fn movement_direction(
    camera_forward: Vec3,
    camera_right: Vec3,
    intent: DirectionIntent,
) -> Vec3 {
    let forward = flatten(camera_forward);
    let right = flatten(camera_right);

    let mut direction = Vec3::ZERO;
    if intent.forward {
        direction += forward;
    }
    if intent.back {
        direction -= forward;
    }
    if intent.left {
        direction -= right;
    }
    if intent.right {
        direction += right;
    }
    direction
}

/// Rotation whose forward axis points along `direction`, upright.
pub fn heading_rotation(direction: Dir3) -> Quat {
    Transform::IDENTITY.looking_to(direction, Dir3::Y).rotation
}

/// Advance `body` one tick.
///
/// Translation follows the body's facing from before this tick; the new
/// heading is only eased toward afterwards, so turns land one tick late.
pub fn step_motion(
    state: &mut LocomotionState,
    body: &mut Transform,
    direction: Vec3,
    speed: f32,
    rotation_speed: f32,
    dt: f32,
) -> bool {
    let moved = match Dir3::new(direction) {
        Ok(heading) => {
            state.target_heading = heading_rotation(heading);
            body.translation += *body.forward() * speed * dt;
            true
        }
        Err(_) => false,
    };

    let t = (rotation_speed * dt).clamp(0.0, 1.0);
    body.rotation = body.rotation.slerp(state.target_heading, t);
    moved
}
