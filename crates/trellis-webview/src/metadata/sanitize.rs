//! Validation of page-supplied values before they reach the overlay.
//!
//! Colors are restricted to hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! and `rgb()`/`rgba()` with numeric arguments. Image links must be
//! `http(s)` or inline `data:image/` URLs.

const DANGEROUS: [&str; 8] = [
    "expression(",
    "url(",
    "javascript:",
    "eval(",
    "import",
    "behavior:",
    "-moz-binding",
    "@charset",
];

/// Validate a CSS color value extracted from a page.
pub fn validate_color(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }
    check_injection_patterns(trimmed)?;

    if let Some(hex) = trimmed.strip_prefix('#') {
        return validate_hex(hex, trimmed);
    }
    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }
    Err(format!(
        "only hex and rgb()/rgba() colors are accepted, got '{trimmed}'"
    ))
}

/// Validate a link to an image (favicon, preview image).
pub fn validate_image_url(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("data:image/");
    if !allowed {
        return Err(format!("unsupported image url '{trimmed}'"));
    }
    if trimmed.chars().any(|c| c.is_whitespace() || c == '"' || c == '<' || c == '>') {
        return Err(format!("invalid character in image url '{trimmed}'"));
    }
    Ok(())
}

/// Keep `value` only when it is a safe color.
pub fn color(value: Option<String>) -> Option<String> {
    value.filter(|v| validate_color(v).is_ok()).map(|v| v.trim().to_string())
}

/// Keep `value` only when it is a safe image link.
pub fn image_url(value: Option<String>) -> Option<String> {
    value.filter(|v| validate_image_url(v).is_ok()).map(|v| v.trim().to_string())
}

fn check_injection_patterns(value: &str) -> Result<(), String> {
    let lower = value.to_lowercase();
    for pattern in DANGEROUS {
        if lower.contains(pattern) {
            return Err(format!("blocked: contains '{pattern}'"));
        }
    }
    for ch in [';', '{', '}', '<', '>', '@'] {
        if value.contains(ch) {
            return Err(format!("blocked: contains '{ch}'"));
        }
    }
    Ok(())
}

fn validate_hex(hex: &str, value: &str) -> Result<(), String> {
    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(format!(
            "hex color needs 3/4/6/8 digits, got {} in '{value}'",
            hex.len()
        ));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("non-hex character in '{value}'"));
    }
    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), String> {
    let is_rgba = value.starts_with("rgba(");
    let inner = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("malformed rgb/rgba: '{value}'"))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if is_rgba { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "expected {expected} arguments, got {} in '{value}'",
            parts.len()
        ));
    }
    for (i, part) in parts.iter().enumerate() {
        if part.parse::<f64>().is_err() {
            return Err(format!("non-numeric argument {i} in '{value}': '{part}'"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_colors() {
        for c in ["#fff", "#fffa", "#00d4ff", "#00d4ff80"] {
            assert!(validate_color(c).is_ok(), "{c}");
        }
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(validate_color("#ff").is_err());
        assert!(validate_color("#fffff").is_err());
        assert!(validate_color("#gggggg").is_err());
    }

    #[test]
    fn accepts_computed_style_colors() {
        // getComputedStyle reports colors in this form.
        assert!(validate_color("rgb(255, 255, 255)").is_ok());
        assert!(validate_color("rgba(0, 0, 0, 0)").is_ok());
    }

    #[test]
    fn rejects_wrong_arity_and_names() {
        assert!(validate_color("rgba(0, 0, 0)").is_err());
        assert!(validate_color("rgb(0, 0)").is_err());
        assert!(validate_color("rgba(red, 0, 0, 1)").is_err());
        assert!(validate_color("red").is_err());
        assert!(validate_color("").is_err());
    }

    #[test]
    fn rejects_injection() {
        assert!(validate_color("expression(alert(1))").is_err());
        assert!(validate_color("#fff } body { background: red").is_err());
        assert!(validate_color("red; background: url(evil)").is_err());
    }

    #[test]
    fn image_urls() {
        assert!(validate_image_url("https://a.test/favicon.ico").is_ok());
        assert!(validate_image_url("data:image/png;base64,AAAA").is_ok());
        assert!(validate_image_url("javascript:alert(1)").is_err());
        assert!(validate_image_url("https://a.test/x\" onload=\"y").is_err());
    }

    #[test]
    fn option_helpers_trim_and_filter() {
        assert_eq!(color(Some(" #abc ".into())), Some("#abc".into()));
        assert_eq!(color(Some("blue".into())), None);
        assert_eq!(image_url(None), None);
    }
}
