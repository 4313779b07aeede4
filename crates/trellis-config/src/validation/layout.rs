//! Layout configuration validation (gutter, resize step).

use crate::schema::TrellisConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &TrellisConfig) {
    validate_range(errors, "layout.gutter", config.layout.gutter, 0, 32);
    validate_range_f64(
        errors,
        "layout.resize_step",
        config.layout.resize_step,
        0.01,
        0.5,
    );
}
