//! Park domain: tests for respawn placement and the red-green signal.

use bevy::prelude::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use super::{RedGreenSignal, SpawnPoints, pick_respawn_point};
use crate::content::SkaterConfig;

#[test]
fn test_spawn_points_from_config() {
    let points = SpawnPoints::from_config(&SkaterConfig::default());
    assert_eq!(points.0.len(), 1);
    assert_eq!(points.initial(), Vec3::new(0.0, 1.5, 8.0));
}

#[test]
fn test_respawn_point_is_configured_point() {
    let points = SpawnPoints(vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(2.0, 1.0, 2.0),
        Vec3::new(3.0, 1.0, 3.0),
    ]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..20 {
        let point = pick_respawn_point(&points, &mut rng);
        assert!(points.0.contains(&point));
    }
}

#[test]
fn test_respawn_is_deterministic_for_seed() {
    let points = SpawnPoints(vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE]);
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..10 {
        assert_eq!(
            pick_respawn_point(&points, &mut a),
            pick_respawn_point(&points, &mut b)
        );
    }
}

#[test]
fn test_respawn_without_points_falls_back() {
    let points = SpawnPoints(Vec::new());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(pick_respawn_point(&points, &mut rng), Vec3::Y);
    assert_eq!(points.initial(), Vec3::Y);
}

#[test]
fn test_red_green_start_stop() {
    let mut signal = RedGreenSignal::default();
    assert!(!signal.is_running());
    assert!(signal.stop().is_none());

    assert!(signal.start());
    assert!(!signal.start());
    signal.tick(Duration::from_millis(1500));

    assert_eq!(signal.stop(), Some(Duration::from_millis(1500)));
    assert!(!signal.is_running());
    assert_eq!(signal.completed_runs(), 1);
}

#[test]
fn test_red_green_ignores_time_while_stopped() {
    let mut signal = RedGreenSignal::default();
    signal.tick(Duration::from_secs(3));
    assert_eq!(signal.elapsed(), Duration::ZERO);

    signal.start();
    signal.tick(Duration::from_secs(1));
    signal.stop();
    signal.tick(Duration::from_secs(5));
    assert_eq!(signal.elapsed(), Duration::from_secs(1));
}
