//! Core domain: end-of-run screen and input handling.

use bevy::prelude::*;

use crate::core::{GameState, RunClock};

/// Marker for end menu entities (UI root and its camera)
#[derive(Component, Debug)]
pub struct EndMenuUI;

pub(crate) fn spawn_end_menu(mut commands: Commands, clock: Res<RunClock>) {
    let bg_color = Color::srgba(0.02, 0.05, 0.1, 0.98);
    let title_color = Color::srgb(0.95, 0.85, 0.3);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);

    commands.spawn((EndMenuUI, Camera2d));

    commands
        .spawn((
            EndMenuUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("RUN COMPLETE"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!(
                    "Time: {:.1}s   Falls: {}",
                    clock.elapsed.as_secs_f32(),
                    clock.deaths
                )),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press ENTER to skate again"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(muted_text),
            ));
        });
}

pub(crate) fn cleanup_end_menu(mut commands: Commands, query: Query<Entity, With<EndMenuUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_end_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        game_state.set(GameState::Playing);
    }
}
