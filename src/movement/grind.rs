//! Movement domain: two-state board pose for grinding.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::movement::locomotion::{flatten, heading_rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrindPose {
    #[default]
    Normal,
    Grinding,
}

impl GrindPose {
    pub fn from_active(active: bool) -> Self {
        if active {
            GrindPose::Grinding
        } else {
            GrindPose::Normal
        }
    }
}

/// World rotation of the board visual after entering `pose`.
///
/// Grinding turns the board 90 degrees off the character's horizontal
/// forward. Leaving the grind turns the board back 90 degrees from wherever
/// it currently points, not to a stored pose.
pub fn board_orientation(
    pose: GrindPose,
    character_forward: Vec3,
    board_forward: Vec3,
) -> Option<Quat> {
    match pose {
        GrindPose::Grinding => {
            let heading = Dir3::new(flatten(character_forward)).ok()?;
            Some(heading_rotation(heading) * Quat::from_rotation_y(FRAC_PI_2))
        }
        GrindPose::Normal => {
            let heading = Dir3::new(board_forward).ok()?;
            Some(heading_rotation(heading) * Quat::from_rotation_y(-FRAC_PI_2))
        }
    }
}

/// World rotation of a child posed at `local` under a root at `root`.
pub fn child_world_rotation(root: Quat, local: Quat) -> Quat {
    root * local
}

/// Local rotation that places a child of `root` at world rotation `world`.
pub fn child_local_rotation(root: Quat, world: Quat) -> Quat {
    root.inverse() * world
}
