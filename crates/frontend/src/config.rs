//! Runtime settings of the CRM frontend.
//!
//! Settings are plain serde structs with defaults; the app root provides them
//! through Leptos context, components fall back to `Default` when absent.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Hard cap on the number of global search results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Key that opens the global search together with Ctrl (or Cmd on macOS).
pub const DEFAULT_SHORTCUT_KEY: &str = "k";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub max_results: usize,
    pub shortcut_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            shortcut_key: DEFAULT_SHORTCUT_KEY.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid search config: {}", e))
    }

    /// True when a key press (`KeyboardEvent.key` / `.code`) is the shortcut key.
    ///
    /// Letter and digit shortcuts also match on the physical key, so Ctrl+K
    /// works with a Persian layout where `key` reports `ن`.
    pub fn is_shortcut(&self, key: &str, code: &str) -> bool {
        key.eq_ignore_ascii_case(&self.shortcut_key)
            || self.shortcut_code().is_some_and(|expected| expected == code)
    }

    fn shortcut_code(&self) -> Option<String> {
        let mut chars = self.shortcut_key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Some(format!("Key{}", c.to_ascii_uppercase()))
            }
            (Some(c), None) if c.is_ascii_digit() => Some(format!("Digit{}", c)),
            _ => None,
        }
    }
}

/// Search settings from context, or defaults.
pub fn use_search_config() -> SearchConfig {
    use_context::<SearchConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_results, 10);
        assert!(config.is_shortcut("K", "KeyK"));
        assert!(!config.is_shortcut("j", "KeyJ"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SearchConfig::from_json(r#"{"shortcutKey":"/"}"#).unwrap();
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.shortcut_key, "/");
    }

    #[test]
    fn test_invalid_json() {
        assert!(SearchConfig::from_json("{\"maxResults\":\"many\"}").is_err());
    }

    #[test]
    fn test_shortcut_matches_physical_key_on_persian_layout() {
        let config = SearchConfig::default();
        assert!(config.is_shortcut("ن", "KeyK"));
        assert!(!config.is_shortcut("ت", "KeyJ"));

        let slash = SearchConfig::from_json(r#"{"shortcutKey":"/"}"#).unwrap();
        assert!(slash.is_shortcut("/", "Slash"));
        assert!(!slash.is_shortcut("ن", "KeyK"));
    }
}
