//! Engine limit and interaction timing validation.

use crate::schema::BubblesConfig;

use super::helpers::validate_range;

pub(crate) fn validate_engine(errors: &mut Vec<String>, config: &BubblesConfig) {
    validate_range(
        errors,
        "engine.max_iterations",
        config.engine.max_iterations,
        1,
        100,
    );
    validate_range(
        errors,
        "engine.max_placement_attempts",
        config.engine.max_placement_attempts,
        1,
        10000,
    );
}

pub(crate) fn validate_interaction(errors: &mut Vec<String>, config: &BubblesConfig) {
    validate_range(
        errors,
        "interaction.click_threshold_ms",
        config.interaction.click_threshold_ms,
        0,
        2000,
    );
}
