//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::keybinds;
use crate::schema::TrellisConfig;
use trellis_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TrellisConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    layout::validate_layout(&mut errors, config);
    misc::validate_session(&mut errors, config);
    misc::validate_browser(&mut errors, config);
    misc::validate_hints(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
