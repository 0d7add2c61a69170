//! Movement domain: input sampling for the skater.

use bevy::prelude::*;

use crate::movement::{DirectionIntent, SkaterInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<SkaterInput>) {
    input.direction = DirectionIntent {
        forward: keyboard.pressed(KeyCode::KeyW),
        back: keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::KeyD),
    };
    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);

    // Grind is held: press starts it, release ends it
    input.grind_just_pressed = keyboard.just_pressed(KeyCode::ControlLeft);
    input.grind_just_released = keyboard.just_released(KeyCode::ControlLeft);

    input.save_just_pressed = keyboard.just_pressed(KeyCode::KeyX);
    input.load_just_pressed = keyboard.just_pressed(KeyCode::KeyM);
    input.special_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
}
