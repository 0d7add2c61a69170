//! Park domain: skatepark layout, camera and cleanup.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player, PlayerCamera, SurfaceTag};

/// Marker for everything that belongs to the running park
#[derive(Component, Debug)]
pub struct ParkEntity;

/// Offset of the follow camera from the skater
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 6.0, 12.0);

/// Angular speed of the carousel, radians per second
const CAROUSEL_SPIN: f32 = 0.6;

struct SurfaceSpec {
    tag: &'static str,
    size: Vec3,
    position: Vec3,
    color: Color,
}

fn spawn_surface(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    spec: SurfaceSpec,
) -> Entity {
    commands
        .spawn((
            ParkEntity,
            SurfaceTag::new(spec.tag),
            Mesh3d(meshes.add(Cuboid::from_size(spec.size))),
            MeshMaterial3d(materials.add(spec.color)),
            Transform::from_translation(spec.position),
            RigidBody::Static,
            Collider::cuboid(spec.size.x, spec.size.y, spec.size.z),
            CollisionLayers::new(GameLayer::Surface, [GameLayer::Player]),
        ))
        .id()
}

fn spawn_sensor(commands: &mut Commands, tag: &'static str, size: Vec3, position: Vec3) {
    commands.spawn((
        ParkEntity,
        SurfaceTag::new(tag),
        Transform::from_translation(position),
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_park(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.45, 0.47, 0.5);
    let rail_color = Color::srgb(0.75, 0.75, 0.8);

    commands.spawn((
        ParkEntity,
        PlayerCamera,
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        ParkEntity,
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Main deck
    spawn_surface(
        &mut commands,
        &mut meshes,
        &mut materials,
        SurfaceSpec {
            tag: "Ground",
            size: Vec3::new(40.0, 1.0, 60.0),
            position: Vec3::new(0.0, -0.5, 0.0),
            color: ground_color,
        },
    );

    // Red-green pad
    spawn_surface(
        &mut commands,
        &mut meshes,
        &mut materials,
        SurfaceSpec {
            tag: "RedGreen",
            size: Vec3::new(8.0, 0.2, 8.0),
            position: Vec3::new(10.0, 0.1, -6.0),
            color: Color::srgb(0.8, 0.25, 0.2),
        },
    );

    // Rails carry no gameplay tag
    for x in [-4.0, 4.0] {
        spawn_surface(
            &mut commands,
            &mut meshes,
            &mut materials,
            SurfaceSpec {
                tag: "Rail",
                size: Vec3::new(0.2, 0.6, 10.0),
                position: Vec3::new(x, 0.3, -12.0),
                color: rail_color,
            },
        );
    }

    // Carousel spins under the skater
    commands.spawn((
        ParkEntity,
        SurfaceTag::new("Carousel"),
        Mesh3d(meshes.add(Cylinder::new(4.0, 0.4))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.85))),
        Transform::from_xyz(-10.0, 0.2, -6.0),
        RigidBody::Kinematic,
        AngularVelocity(Vec3::Y * CAROUSEL_SPIN),
        Collider::cylinder(4.0, 0.4),
        CollisionLayers::new(GameLayer::Surface, [GameLayer::Player]),
    ));

    // Falling off the deck kills
    spawn_sensor(
        &mut commands,
        "Death",
        Vec3::new(200.0, 1.0, 200.0),
        Vec3::new(0.0, -12.0, 0.0),
    );

    spawn_sensor(
        &mut commands,
        "FinishLine",
        Vec3::new(12.0, 3.0, 1.0),
        Vec3::new(0.0, 1.5, -27.0),
    );

    info!("Skatepark spawned");
}

pub(crate) fn cleanup_park(mut commands: Commands, query: Query<Entity, With<ParkEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn follow_player_camera(
    player_query: Query<&Transform, (With<Player>, Without<PlayerCamera>)>,
    mut camera_query: Query<&mut Transform, With<PlayerCamera>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };

    for mut camera in &mut camera_query {
        camera.translation = player.translation + CAMERA_OFFSET;
        camera.look_at(player.translation, Vec3::Y);
    }
}
