//! Browsing defaults: home page, search engine, user agent.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the encoded query in `search_url`.
pub const SEARCH_QUERY_PLACEHOLDER: &str = "{query}";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// URL loaded into every newly created pane.
    pub home_url: String,
    /// Search URL template; must contain `{query}`.
    pub search_url: String,
    /// Custom user agent. `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Enable web inspector in content surfaces.
    pub devtools: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "https://duckduckgo.com".into(),
            search_url: "https://duckduckgo.com/?q={query}".into(),
            user_agent: None,
            devtools: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_url_has_placeholder() {
        let config = BrowserConfig::default();
        assert!(config.search_url.contains(SEARCH_QUERY_PLACEHOLDER));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn user_agent_parses_from_toml() {
        let config: BrowserConfig = toml::from_str(r#"user_agent = "trellis/0.1""#).unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("trellis/0.1"));
        assert_eq!(config.home_url, "https://duckduckgo.com");
    }
}
