//! Movement domain: skater locomotion, contact handling, zone speeds and grind pose.

mod bootstrap;
mod components;
mod contact;
mod grind;
mod locomotion;
mod resources;
mod skater;
mod speed;
mod systems;


pub use bootstrap::{SetupError, spawn_skater};
pub(crate) use bootstrap::verify_skater_setup;
pub(crate) use systems::read_input;
pub use components::{BoardVisual, CharacterModel, GameLayer, Player, PlayerCamera, SkaterRig};
pub use contact::{CollaboratorRequest, ContactReaction, SurfaceTag, ZoneKind};
pub use grind::{GrindPose, board_orientation, child_local_rotation, child_world_rotation};
pub use locomotion::{LocomotionState, heading_rotation, movement_direction, step_motion};
pub use resources::{DirectionIntent, MovementTuning, SkaterInput};
pub use skater::Skater;
pub use speed::{SpeedPair, SpeedProfile, ZoneSpeeds};

use bevy::prelude::*;

use crate::content::SkaterConfig;
use crate::core::GameState;
use crate::movement::systems::{
    apply_grind_input, apply_jump, apply_motion, apply_zone_stay, handle_contact_begin,
    handle_zone_exit, tick_speed_revert,
};

/// Ordering of the per-frame skater pipeline
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SkaterSet {
    Input,
    Motion,
    Contacts,
    Actions,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        configure_skater_sets(app);
        app.init_resource::<MovementTuning>()
            .init_resource::<SkaterInput>()
            .add_systems(Startup, apply_tuning_from_config)
            .add_systems(Update, read_input.in_set(SkaterSet::Input))
            .add_systems(
                Update,
                (apply_motion, apply_jump).chain().in_set(SkaterSet::Motion),
            )
            .add_systems(
                Update,
                (
                    tick_speed_revert,
                    handle_contact_begin,
                    apply_zone_stay,
                    handle_zone_exit,
                )
                    .chain()
                    .in_set(SkaterSet::Contacts),
            )
            .add_systems(Update, apply_grind_input.in_set(SkaterSet::Actions));
    }
}

/// Chain the skater sets so every reader of `SkaterInput` runs after sampling.
pub(crate) fn configure_skater_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            SkaterSet::Input,
            SkaterSet::Motion,
            SkaterSet::Contacts,
            SkaterSet::Actions,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
}

fn apply_tuning_from_config(config: Res<SkaterConfig>, mut tuning: ResMut<MovementTuning>) {
    *tuning = MovementTuning::from_config(&config);
    debug!("Movement tuning: {:?}", *tuning);
}
