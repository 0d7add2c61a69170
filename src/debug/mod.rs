//! Debug overlay for tuning the skater controller.
//!
//! F3 toggles a text panel with the live locomotion flags, zone speeds,
//! pending revert and red-green signal.

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{Player, Skater};
use crate::park::RedGreenSignal;
use crate::persistence::PlayerStats;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_debug_info, update_debug_info_overlay)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_debug_info);
    }
}

fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!(
        "[DEBUG] Info overlay {}",
        if debug_state.show_info { "ON" } else { "OFF" }
    );

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    signal: Res<RedGreenSignal>,
    skaters: Query<(&Transform, &Skater, &PlayerStats), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let Some((transform, skater, stats)) = skaters.iter().next() else {
        **text = "No skater".to_string();
        return;
    };

    let locomotion = skater.locomotion();
    let speed = skater.speed().current();
    let revert = match skater.speed().revert_remaining_secs() {
        Some(secs) => format!("{:.2}s", secs),
        None => "-".to_string(),
    };
    let pos = transform.translation;

    **text = format!(
        "Pos: ({:.1}, {:.1}, {:.1})\nGrounded: {}  Jumped: {}  CanFlip: {}\nGrind: {:?}\nSpeed: walk {:.1} / sprint {:.1}\nRevert in: {}\nRedGreen: {} ({:.1}s, {} runs)\nGauge: {:.2}",
        pos.x,
        pos.y,
        pos.z,
        locomotion.is_grounded,
        locomotion.has_jumped,
        locomotion.can_flip,
        locomotion.grind,
        speed.walk,
        speed.sprint,
        revert,
        if signal.is_running() { "running" } else { "idle" },
        signal.elapsed().as_secs_f32(),
        signal.completed_runs(),
        stats.0.special_move_gauge,
    );
}

fn cleanup_debug_info(
    mut commands: Commands,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    debug_state.show_info = false;
    for entity in &existing_overlay {
        commands.entity(entity).despawn();
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
