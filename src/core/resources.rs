//! Core domain: shared resources for the current run.

use bevy::prelude::*;
use std::time::Duration;

/// Time spent skating in the current run
#[derive(Resource, Debug, Default)]
pub struct RunClock {
    pub elapsed: Duration,
    pub deaths: u32,
}

impl RunClock {
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.deaths = 0;
    }
}
