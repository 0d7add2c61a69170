//! Sanity checks for loaded config values.

use super::data::{SkaterConfig, SpeedPairDef};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Longest zone revert delay accepted, in seconds
const MAX_REVERT_DELAY_SECS: f32 = 60.0;

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $field:expr, $value:expr) => {
        if !($value > 0.0 && $value.is_finite()) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("expected a positive finite value, got {}", $value),
            });
        }
    };
}

fn check_pair(errors: &mut Vec<ValidationError>, field: &'static str, pair: &SpeedPairDef) {
    check_positive!(errors, field, pair.walk);
    check_positive!(errors, field, pair.sprint);
}

/// Validate every tunable in the config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &SkaterConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, "movement.walk_speed", config.movement.walk_speed);
    check_positive!(errors, "movement.sprint_speed", config.movement.sprint_speed);
    check_positive!(errors, "movement.jump_impulse", config.movement.jump_impulse);
    check_positive!(errors, "movement.body_mass", config.movement.body_mass);

    let rotation_speed = config.movement.rotation_speed;
    if !(rotation_speed >= 0.0 && rotation_speed.is_finite()) {
        errors.push(ValidationError {
            field: "movement.rotation_speed",
            message: format!("expected a non-negative finite value, got {}", rotation_speed),
        });
    }

    check_pair(&mut errors, "zones.carousel", &config.zones.carousel);
    check_pair(&mut errors, "zones.red_green", &config.zones.red_green);
    let revert_delay = config.zones.revert_delay_secs;
    check_positive!(errors, "zones.revert_delay_secs", revert_delay);
    if revert_delay.is_finite() && revert_delay > MAX_REVERT_DELAY_SECS {
        errors.push(ValidationError {
            field: "zones.revert_delay_secs",
            message: format!(
                "expected at most {}s, got {}",
                MAX_REVERT_DELAY_SECS, revert_delay
            ),
        });
    }

    if config.spawn_points.is_empty() {
        errors.push(ValidationError {
            field: "spawn_points",
            message: "at least one spawn point is required".to_string(),
        });
    }

    if config.save_file.trim().is_empty() {
        errors.push(ValidationError {
            field: "save_file",
            message: "path must not be empty".to_string(),
        });
    }

    errors
}
