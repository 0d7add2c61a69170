//! Special domain: the special moves shipped with each skater kind.

use crate::special::{SpecialMove, SpecialMoveContext, SpecialMoveOutcome};

/// Flip trick. Needs a jump since the last landing and an unused flip.
#[derive(Debug, Default)]
pub struct Kickflip;

/// Gauge earned per flip
const KICKFLIP_GAUGE_GAIN: f32 = 0.1;

impl SpecialMove for Kickflip {
    fn name(&self) -> &'static str {
        "Kickflip"
    }

    fn perform_special_move(&mut self, ctx: &SpecialMoveContext<'_>) -> SpecialMoveOutcome {
        let state = ctx.locomotion;
        if state.is_grounded || !state.has_jumped || !state.can_flip {
            return SpecialMoveOutcome::Unavailable;
        }
        SpecialMoveOutcome::Performed {
            gauge_delta: KICKFLIP_GAUGE_GAIN,
            consumes_flip: true,
            forward_boost: 0.0,
        }
    }
}

/// Grounded slide that spends gauge for a burst along the facing direction.
#[derive(Debug)]
pub struct PowerSlide {
    pub gauge_cost: f32,
    /// Burst as a multiple of the current sprint speed
    pub boost_factor: f32,
}

impl Default for PowerSlide {
    fn default() -> Self {
        Self {
            gauge_cost: 0.25,
            boost_factor: 0.5,
        }
    }
}

impl SpecialMove for PowerSlide {
    fn name(&self) -> &'static str {
        "PowerSlide"
    }

    fn perform_special_move(&mut self, ctx: &SpecialMoveContext<'_>) -> SpecialMoveOutcome {
        if !ctx.locomotion.is_grounded || ctx.stats.special_move_gauge < self.gauge_cost {
            return SpecialMoveOutcome::Unavailable;
        }
        SpecialMoveOutcome::Performed {
            gauge_delta: -self.gauge_cost,
            consumes_flip: false,
            forward_boost: ctx.speed.current().sprint * self.boost_factor,
        }
    }
}
