//! Full configuration validation.
//!
//! Validates numeric ranges for every section. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod container;
mod engine;
mod helpers;


use crate::schema::BubblesConfig;
use bubbles_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BubblesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    container::validate_container(&mut errors, config);
    container::validate_bubble(&mut errors, config);
    engine::validate_engine(&mut errors, config);
    engine::validate_interaction(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
