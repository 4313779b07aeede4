//! Validation for the session, browser, hints and window sections.

use crate::schema::{TrellisConfig, SEARCH_QUERY_PLACEHOLDER};

use super::helpers::validate_range;

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &TrellisConfig) {
    let session = &config.session;
    validate_range(
        errors,
        "session.persist_debounce_ms",
        u32::try_from(session.persist_debounce_ms).unwrap_or(u32::MAX),
        100,
        60_000,
    );
    validate_range(
        errors,
        "session.search_debounce_ms",
        u32::try_from(session.search_debounce_ms).unwrap_or(u32::MAX),
        50,
        5_000,
    );
    validate_range(
        errors,
        "session.max_workspaces",
        session.max_workspaces.into(),
        1,
        9,
    );
    validate_range(
        errors,
        "session.max_live_workspaces",
        session.max_live_workspaces.into(),
        1,
        9,
    );
}

pub(crate) fn validate_browser(errors: &mut Vec<String>, config: &TrellisConfig) {
    if !config.browser.search_url.contains(SEARCH_QUERY_PLACEHOLDER) {
        errors.push(format!(
            "browser.search_url must contain {SEARCH_QUERY_PLACEHOLDER}"
        ));
    }
    if config.browser.home_url.trim().is_empty() {
        errors.push("browser.home_url is empty".into());
    }
}

pub(crate) fn validate_hints(errors: &mut Vec<String>, config: &TrellisConfig) {
    let chars = config.hints.chars();
    if chars.len() < 2 {
        errors.push("hints.alphabet needs at least 2 characters".into());
    }
    let mut seen = Vec::with_capacity(chars.len());
    for c in &chars {
        if !c.is_alphanumeric() {
            errors.push(format!("hints.alphabet contains non-alphanumeric '{c}'"));
        }
        if seen.contains(c) {
            errors.push(format!("hints.alphabet repeats '{c}'"));
        }
        seen.push(*c);
    }

    // A bare-letter toggle inside the alphabet would be swallowed as hint input.
    let toggle = config.keybinds.toggle_hints.trim();
    let mut toggle_chars = toggle.chars();
    if let (Some(t), None) = (toggle_chars.next(), toggle_chars.next()) {
        if chars.iter().any(|c| c.eq_ignore_ascii_case(&t)) {
            errors.push(format!(
                "hints.alphabet contains the toggle_hints key '{toggle}'"
            ));
        }
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &TrellisConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 16_384);
    validate_range(errors, "window.height", config.window.height, 240, 16_384);
}
