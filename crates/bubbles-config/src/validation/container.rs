//! Container and bubble size validation.

use crate::schema::BubblesConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_container(errors: &mut Vec<String>, config: &BubblesConfig) {
    validate_range_f64(errors, "container.width", config.container.width, 1.0, 10000.0);
    validate_range_f64(
        errors,
        "container.height",
        config.container.height,
        1.0,
        10000.0,
    );
}

pub(crate) fn validate_bubble(errors: &mut Vec<String>, config: &BubblesConfig) {
    validate_range_f64(errors, "bubble.size", config.bubble.size, 1.0, 1000.0);
}
