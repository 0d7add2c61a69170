//! Movement domain: contact begin/stay/end handling and speed reverts.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{LoadSceneEvent, RespawnPlayerEvent};
use crate::movement::contact::{CollaboratorRequest, ContactReaction, SurfaceTag, ZoneKind};
use crate::movement::{MovementTuning, Player, Skater};
use crate::park::{StartRedGreenEvent, StopRedGreenEvent};

fn zone_of(surfaces: &Query<&SurfaceTag>, entity: Entity) -> ZoneKind {
    surfaces
        .get(entity)
        .map(SurfaceTag::zone)
        .unwrap_or(ZoneKind::Other)
}

pub(crate) fn tick_speed_revert(time: Res<Time>, mut query: Query<&mut Skater, With<Player>>) {
    for mut skater in &mut query {
        if skater.tick_revert(time.delta()) {
            let speeds = skater.speed().current();
            debug!(
                "Speed reverted to base: walk={}, sprint={}",
                speeds.walk, speeds.sprint
            );
        }
    }
}

pub(crate) fn handle_contact_begin(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut respawn_events: MessageWriter<RespawnPlayerEvent>,
    mut scene_events: MessageWriter<LoadSceneEvent>,
    mut start_red_green: MessageWriter<StartRedGreenEvent>,
    mut stop_red_green: MessageWriter<StopRedGreenEvent>,
    surfaces: Query<&SurfaceTag>,
    mut skaters: Query<&mut Skater, With<Player>>,
) {
    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (skater_entity, surface_entity) in pairs {
            let Ok(mut skater) = skaters.get_mut(skater_entity) else {
                continue;
            };

            let zone = zone_of(&surfaces, surface_entity);
            let reaction = skater.on_contact_begin(zone);
            match reaction {
                ContactReaction::Ignored => continue,
                ContactReaction::Grounded(zone) => debug!("Grounded on {:?}", zone),
                ContactReaction::LandedOnGround => debug!("Grounded, can flip"),
                ContactReaction::Died => {
                    info!("Skater {:?} hit a death zone", skater_entity);
                    commands.entity(skater_entity).despawn();
                }
                ContactReaction::ReachedFinish => info!("Finish line reached"),
            }

            match reaction.request() {
                Some(CollaboratorRequest::Respawn) => {
                    respawn_events.write(RespawnPlayerEvent);
                }
                Some(CollaboratorRequest::LoadScene(scene)) => {
                    scene_events.write(LoadSceneEvent {
                        scene: scene.to_string(),
                    });
                }
                Some(CollaboratorRequest::StartRedGreen) => {
                    start_red_green.write(StartRedGreenEvent);
                }
                Some(CollaboratorRequest::StopRedGreen) => {
                    stop_red_green.write(StopRedGreenEvent);
                }
                None => {}
            }
        }
    }
}

/// Zone stay fires every frame for every surface currently touched.
/// Overlapping zones resolve to whichever is processed last.
pub(crate) fn apply_zone_stay(
    tuning: Res<MovementTuning>,
    surfaces: Query<&SurfaceTag>,
    mut skaters: Query<(&mut Skater, &CollidingEntities), With<Player>>,
) {
    for (mut skater, colliding) in &mut skaters {
        for &entity in colliding.iter() {
            let zone = zone_of(&surfaces, entity);
            skater.on_zone_stay(zone, &tuning.zones);
        }
    }
}

pub(crate) fn handle_zone_exit(
    tuning: Res<MovementTuning>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    surfaces: Query<&SurfaceTag>,
    mut skaters: Query<&mut Skater, With<Player>>,
) {
    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (skater_entity, surface_entity) in pairs {
            let Ok(mut skater) = skaters.get_mut(skater_entity) else {
                continue;
            };

            let zone = zone_of(&surfaces, surface_entity);
            if skater.on_zone_exit(zone, &tuning.zones) {
                debug!(
                    "Left {:?}, reverting speed in {:?}",
                    zone, tuning.zones.revert_delay
                );
            }
        }
    }
}
