//! Special domain: tests for the special move slot and variants.

use bevy::prelude::Quat;

use super::{
    Kickflip, PowerSlide, SpecialMove, SpecialMoveContext, SpecialMoveOutcome, SpecialMoveSlot,
    apply_outcome,
};
use crate::content::SkaterKind;
use crate::movement::{LocomotionState, Skater, SpeedProfile, ZoneKind};
use crate::persistence::PersistedStats;

fn perform(
    special: &mut dyn SpecialMove,
    locomotion: &LocomotionState,
    stats: &PersistedStats,
) -> SpecialMoveOutcome {
    let speed = SpeedProfile::new(3.5, 5.5);
    special.perform_special_move(&SpecialMoveContext {
        locomotion,
        speed: &speed,
        stats,
    })
}

fn airborne_after_jump() -> LocomotionState {
    LocomotionState {
        is_grounded: false,
        has_jumped: true,
        can_flip: true,
        ..Default::default()
    }
}

#[test]
fn test_slot_for_kind() {
    assert_eq!(SpecialMoveSlot::for_kind(SkaterKind::Kickflipper).name(), "Kickflip");
    assert_eq!(SpecialMoveSlot::for_kind(SkaterKind::Slider).name(), "PowerSlide");
}

#[test]
fn test_kickflip_needs_jump_and_flip() {
    let mut kickflip = Kickflip;
    let stats = PersistedStats::default();

    let grounded = LocomotionState {
        is_grounded: true,
        ..Default::default()
    };
    assert_eq!(
        perform(&mut kickflip, &grounded, &stats),
        SpecialMoveOutcome::Unavailable
    );

    let spent = LocomotionState {
        can_flip: false,
        ..airborne_after_jump()
    };
    assert_eq!(
        perform(&mut kickflip, &spent, &stats),
        SpecialMoveOutcome::Unavailable
    );

    assert!(matches!(
        perform(&mut kickflip, &airborne_after_jump(), &stats),
        SpecialMoveOutcome::Performed {
            consumes_flip: true,
            ..
        }
    ));
}

#[test]
fn test_kickflip_once_per_landing() {
    let mut skater = Skater::new(3.5, 5.5, Quat::IDENTITY);
    let mut stats = PersistedStats::default();
    let mut kickflip = Kickflip;

    skater.on_contact_begin(ZoneKind::Ground);
    assert!(skater.try_jump());

    let outcome = perform(&mut kickflip, skater.locomotion(), &stats);
    assert_eq!(apply_outcome(outcome, &mut skater, &mut stats), Some(0.0));
    assert!(!skater.locomotion().can_flip);
    assert!((stats.special_move_gauge - 0.1).abs() < 1e-6);

    let again = perform(&mut kickflip, skater.locomotion(), &stats);
    assert_eq!(again, SpecialMoveOutcome::Unavailable);
    assert_eq!(apply_outcome(again, &mut skater, &mut stats), None);

    skater.on_contact_begin(ZoneKind::Ground);
    assert!(skater.locomotion().can_flip);
}

#[test]
fn test_power_slide_spends_gauge() {
    let mut slide = PowerSlide::default();
    let grounded = LocomotionState {
        is_grounded: true,
        ..Default::default()
    };

    let empty = PersistedStats::default();
    assert_eq!(
        perform(&mut slide, &grounded, &empty),
        SpecialMoveOutcome::Unavailable
    );

    let mut charged = PersistedStats {
        special_move_gauge: 0.3,
        ..Default::default()
    };
    let outcome = perform(&mut slide, &grounded, &charged);
    let mut skater = Skater::new(3.5, 5.5, Quat::IDENTITY);
    let boost = apply_outcome(outcome, &mut skater, &mut charged).unwrap();

    assert!((boost - 2.75).abs() < 1e-6);
    assert!((charged.special_move_gauge - 0.05).abs() < 1e-6);
    assert!(skater.locomotion().can_flip);
}

#[test]
fn test_gauge_is_clamped() {
    let mut skater = Skater::new(3.5, 5.5, Quat::IDENTITY);
    let mut stats = PersistedStats {
        special_move_gauge: 0.95,
        ..Default::default()
    };

    apply_outcome(
        SpecialMoveOutcome::Performed {
            gauge_delta: 0.5,
            consumes_flip: false,
            forward_boost: 0.0,
        },
        &mut skater,
        &mut stats,
    );
    assert_eq!(stats.special_move_gauge, 1.0);
}
