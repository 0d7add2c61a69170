//! Special domain: per-character special moves behind one trait.
//!
//! Each skater kind supplies its own `SpecialMove`. The move only sees the
//! skater's state; the dispatcher applies whatever the outcome asks for.

mod variants;
#[cfg(test)]
mod tests;

pub use variants::{Kickflip, PowerSlide};

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::SkaterKind;
use crate::core::GameState;
use crate::movement::{LocomotionState, Player, Skater, SkaterInput, SkaterSet, SpeedProfile};
use crate::persistence::{PersistedStats, PlayerStats};

/// Read-only view handed to a special move
#[derive(Debug, Clone, Copy)]
pub struct SpecialMoveContext<'a> {
    pub locomotion: &'a LocomotionState,
    pub speed: &'a SpeedProfile,
    pub stats: &'a PersistedStats,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialMoveOutcome {
    Performed {
        /// Change to the special move gauge, clamped to [0, 1]
        gauge_delta: f32,
        /// Clear `can_flip` until the next ground contact
        consumes_flip: bool,
        /// Velocity added along the skater's facing
        forward_boost: f32,
    },
    Unavailable,
}

pub trait SpecialMove: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn perform_special_move(&mut self, ctx: &SpecialMoveContext<'_>) -> SpecialMoveOutcome;
}

/// The skater's equipped special move
#[derive(Component)]
pub struct SpecialMoveSlot(pub Box<dyn SpecialMove>);

impl SpecialMoveSlot {
    pub fn for_kind(kind: SkaterKind) -> Self {
        match kind {
            SkaterKind::Kickflipper => Self(Box::new(Kickflip)),
            SkaterKind::Slider => Self(Box::new(PowerSlide::default())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

/// Apply an outcome's gauge and flip effects. Returns the forward boost to add.
pub fn apply_outcome(
    outcome: SpecialMoveOutcome,
    skater: &mut Skater,
    stats: &mut PersistedStats,
) -> Option<f32> {
    let SpecialMoveOutcome::Performed {
        gauge_delta,
        consumes_flip,
        forward_boost,
    } = outcome
    else {
        return None;
    };

    stats.special_move_gauge = (stats.special_move_gauge + gauge_delta).clamp(0.0, 1.0);
    if consumes_flip {
        skater.consume_flip();
    }
    Some(forward_boost)
}

pub struct SpecialPlugin;

impl Plugin for SpecialPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            perform_special_moves
                .in_set(SkaterSet::Actions)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

pub(crate) fn perform_special_moves(
    input: Res<SkaterInput>,
    mut query: Query<
        (
            &mut Skater,
            &mut SpecialMoveSlot,
            &mut PlayerStats,
            &Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if !input.special_just_pressed {
        return;
    }

    for (mut skater, mut slot, mut stats, transform, mut velocity) in &mut query {
        if skater.is_terminated() {
            continue;
        }

        let outcome = slot.0.perform_special_move(&SpecialMoveContext {
            locomotion: skater.locomotion(),
            speed: skater.speed(),
            stats: &stats.0,
        });

        match apply_outcome(outcome, &mut skater, &mut stats.0) {
            Some(boost) => {
                velocity.0 += *transform.forward() * boost;
                info!(
                    "{} performed, gauge={:.2}",
                    slot.name(),
                    stats.0.special_move_gauge
                );
            }
            None => debug!("{} unavailable", slot.name()),
        }
    }
}
