//! Park domain: the red-green timing signal.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::time::Duration;

/// Fired when the skater first lands on a red-green pad
#[derive(Debug)]
pub struct StartRedGreenEvent;

impl Message for StartRedGreenEvent {}

/// Fired when the skater lands on plain ground
#[derive(Debug)]
pub struct StopRedGreenEvent;

impl Message for StopRedGreenEvent {}

/// Times how long the skater spends between touching a red-green pad and
/// getting back to plain ground.
#[derive(Resource, Debug, Default)]
pub struct RedGreenSignal {
    running: bool,
    elapsed: Duration,
    completed_runs: u32,
}

impl RedGreenSignal {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }

    /// Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Stop the signal, returning the elapsed time if it was running.
    pub fn stop(&mut self) -> Option<Duration> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.completed_runs += 1;
        Some(self.elapsed)
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.running {
            self.elapsed += delta;
        }
    }
}

pub(crate) fn tick_red_green(time: Res<Time>, mut signal: ResMut<RedGreenSignal>) {
    signal.tick(time.delta());
}

pub(crate) fn handle_red_green_events(
    mut start_events: MessageReader<StartRedGreenEvent>,
    mut stop_events: MessageReader<StopRedGreenEvent>,
    mut signal: ResMut<RedGreenSignal>,
) {
    for _ in start_events.read() {
        if signal.start() {
            info!("Red-green started");
        }
    }

    for _ in stop_events.read() {
        if let Some(elapsed) = signal.stop() {
            info!("Red-green stopped after {:.2}s", elapsed.as_secs_f32());
        }
    }
}

pub(crate) fn reset_red_green(mut signal: ResMut<RedGreenSignal>) {
    *signal = RedGreenSignal::default();
}
