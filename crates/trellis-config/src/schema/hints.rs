//! Link-hint ("biscuit") configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Characters used to build hint labels. Must not contain the
    /// hint-toggle key, or re-pressing it could never exit hint mode.
    pub alphabet: String,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            alphabet: "asdghjkl".into(),
        }
    }
}

impl HintConfig {
    /// Lowercased alphabet characters in configured order.
    pub fn chars(&self) -> Vec<char> {
        self.alphabet
            .chars()
            .flat_map(|c| c.to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_are_lowercased_in_order() {
        let config = HintConfig {
            alphabet: "AsD".into(),
        };
        assert_eq!(config.chars(), vec!['a', 's', 'd']);
    }
}
