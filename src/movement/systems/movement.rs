//! Movement domain: steering, jumping and grind pose systems.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::grind::{child_local_rotation, child_world_rotation};
use crate::movement::locomotion::movement_direction;
use crate::movement::{
    BoardVisual, CharacterModel, MovementTuning, Player, PlayerCamera, Skater, SkaterInput,
    SkaterRig,
};

pub(crate) fn apply_motion(
    time: Res<Time>,
    input: Res<SkaterInput>,
    tuning: Res<MovementTuning>,
    camera_query: Query<&Transform, (With<PlayerCamera>, Without<Player>)>,
    mut query: Query<(&mut Skater, &mut Transform), With<Player>>,
) {
    // Camera presence is checked at setup; a missing camera just means no steering
    let direction = match camera_query.single() {
        Ok(camera) => movement_direction(*camera.forward(), *camera.right(), input.direction),
        Err(_) => Vec3::ZERO,
    };
    let dt = time.delta_secs();

    for (mut skater, mut transform) in &mut query {
        skater.tick_motion(
            &mut transform,
            direction,
            input.sprint_held,
            tuning.rotation_speed,
            dt,
        );
    }
}

pub(crate) fn apply_jump(
    input: Res<SkaterInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Skater, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (mut skater, mut velocity) in &mut query {
        if skater.try_jump() {
            velocity.y += tuning.jump_velocity();
            debug!("Jump: impulse={}", tuning.jump_impulse);
        }
    }
}

pub(crate) fn apply_grind_input(
    input: Res<SkaterInput>,
    mut skaters: Query<(&mut Skater, &Transform, &SkaterRig), With<Player>>,
    models: Query<&Transform, (With<CharacterModel>, Without<Player>)>,
    mut boards: Query<
        &mut Transform,
        (With<BoardVisual>, Without<Player>, Without<CharacterModel>),
    >,
) {
    let active = if input.grind_just_pressed {
        true
    } else if input.grind_just_released {
        false
    } else {
        return;
    };

    for (mut skater, root, rig) in &mut skaters {
        // Children are posed relative to the root, so compose to get world axes
        let model_rotation = rig
            .model
            .and_then(|model| models.get(model).ok())
            .map(|model| child_world_rotation(root.rotation, model.rotation))
            .unwrap_or(root.rotation);
        let character_forward = model_rotation * Vec3::NEG_Z;

        let board_entity = rig.board.filter(|board| boards.contains(*board));
        let board_forward = board_entity
            .and_then(|board| boards.get(board).ok())
            .map(|board| child_world_rotation(root.rotation, board.rotation) * Vec3::NEG_Z);

        let Some(world_rotation) = skater.set_grinding(active, character_forward, board_forward)
        else {
            debug!("Grind active={}: board pose unchanged", active);
            continue;
        };

        if let Some(mut board) = board_entity.and_then(|board| boards.get_mut(board).ok()) {
            board.rotation = child_local_rotation(root.rotation, world_rotation);
            debug!("Grind active={}: board turned", active);
        }
    }
}
