//! Turning address-bar input into a navigable URL.

const SCHEMES: [&str; 6] = ["http://", "https://", "about:", "data:", "file://", "trellis://"];

/// Resolve what the user typed into a URL: explicit schemes are kept,
/// hosts get `https://`, anything else becomes a search using
/// `search_url` (its `{query}` placeholder receives the encoded text).
/// Blank input yields `None`.
pub fn normalize_input(text: &str, search_url: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if has_scheme(text) {
        return Some(text.to_string());
    }
    if looks_like_host(text) {
        return Some(format!("https://{text}"));
    }
    Some(search_url.replace("{query}", &urlencoding::encode(text)))
}

/// `true` when `text` would navigate directly instead of searching.
pub fn looks_like_url(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && (has_scheme(text) || looks_like_host(text))
}

fn has_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    SCHEMES.iter().any(|s| lower.starts_with(s))
}

fn looks_like_host(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let authority = text.split(['/', '?', '#']).next().unwrap_or_default();
    let host = match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => host,
        Some(_) => return false,
        None => authority,
    };

    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }
    let label_ok = |l: &&str| {
        l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !l.starts_with('-')
            && !l.ends_with('-')
    };
    if !labels.iter().all(label_ok) {
        return false;
    }
    // IPv4 literals are all digits; otherwise the TLD must contain a letter.
    let all_numeric = labels.iter().all(|l| l.chars().all(|c| c.is_ascii_digit()));
    let tld = labels.last().copied().unwrap_or_default();
    (all_numeric && labels.len() == 4) || tld.chars().any(|c| c.is_ascii_alphabetic())
}
