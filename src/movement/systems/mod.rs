//! Movement domain: system modules for skater updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{
    apply_zone_stay, handle_contact_begin, handle_zone_exit, tick_speed_revert,
};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_grind_input, apply_jump, apply_motion};
