//! Content domain: tests for config parsing and validation.

use std::time::Duration;

use super::loader::parse_config;
use super::{SkaterConfig, SkaterKind, validate_config};
use crate::movement::ZoneSpeeds;

#[test]
fn test_shipped_config_parses_and_validates() {
    let config: SkaterConfig =
        parse_config("skater.ron", include_str!("../../assets/data/skater.ron"))
            .expect("shipped config should parse");

    assert_eq!(config.movement.walk_speed, 3.5);
    assert_eq!(config.movement.sprint_speed, 5.5);
    assert_eq!(config.zones.carousel.walk, 2.5);
    assert_eq!(config.zones.carousel.sprint, 4.0);
    assert_eq!(config.zones.red_green.walk, 1.5);
    assert_eq!(config.zones.red_green.sprint, 3.0);
    assert_eq!(config.zones.revert_delay_secs, 2.0);
    assert_eq!(config.skater_kind, SkaterKind::Kickflipper);
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_partial_config_fills_defaults() {
    let config: SkaterConfig = parse_config(
        "partial.ron",
        "(skater_kind: Slider, movement: (walk_speed: 4.0))",
    )
    .expect("partial config should parse");

    assert_eq!(config.skater_kind, SkaterKind::Slider);
    assert_eq!(config.movement.walk_speed, 4.0);
    assert_eq!(config.movement.sprint_speed, 5.5);
    assert_eq!(config.zones.revert_delay_secs, 2.0);
    assert_eq!(config.spawn_points.len(), 1);
}

#[test]
fn test_parse_error_names_file() {
    let result: Result<SkaterConfig, _> = parse_config("broken.ron", "(movement: ");
    let err = result.unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&SkaterConfig::default()).is_empty());
}

#[test]
fn test_validation_flags_bad_values() {
    let mut config = SkaterConfig::default();
    config.movement.walk_speed = 0.0;
    config.zones.revert_delay_secs = -1.0;
    config.spawn_points.clear();

    let errors = validate_config(&config);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"movement.walk_speed"));
    assert!(fields.contains(&"zones.revert_delay_secs"));
    assert!(fields.contains(&"spawn_points"));
}

#[test]
fn test_validation_rejects_nan_speed() {
    let mut config = SkaterConfig::default();
    config.zones.carousel.sprint = f32::NAN;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "zones.carousel");
}

#[test]
fn test_validation_rejects_non_finite_values() {
    let config: SkaterConfig = parse_config(
        "non_finite.ron",
        "(zones: (revert_delay_secs: inf), movement: (rotation_speed: NaN))",
    )
    .expect("non-finite floats should still parse");

    let errors = validate_config(&config);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 2);
    assert!(fields.contains(&"zones.revert_delay_secs"));
    assert!(fields.contains(&"movement.rotation_speed"));
}

#[test]
fn test_validation_rejects_infinite_speed_and_zero_jump() {
    let mut config = SkaterConfig::default();
    config.movement.sprint_speed = f32::INFINITY;
    config.movement.jump_impulse = 0.0;

    let errors = validate_config(&config);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 2);
    assert!(fields.contains(&"movement.sprint_speed"));
    assert!(fields.contains(&"movement.jump_impulse"));
}

#[test]
fn test_validation_caps_revert_delay() {
    let mut config = SkaterConfig::default();
    config.zones.revert_delay_secs = 1.0e12;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "zones.revert_delay_secs");

    config.zones.revert_delay_secs = 60.0;
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_zone_speeds_tolerate_unusable_delay() {
    let mut config = SkaterConfig::default();
    config.zones.revert_delay_secs = f32::INFINITY;

    let zones = ZoneSpeeds::from_def(&config.zones);
    assert_eq!(zones.revert_delay, Duration::ZERO);
}
