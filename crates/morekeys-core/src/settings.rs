// Morekeys Settings
// Long-press popup preferences and their TOML-backed store

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::category::{default_order, KeyCategory};
use crate::keyspec::{join_key_specs, split_key_specs};
use crate::ordering::{decode_order, encode_order};
use crate::reorder::reorder_key_specs;

/// Immutable snapshot of the long-press popup preferences.
///
/// A snapshot is loaded fresh from the store for each use and is never
/// mutated by the reorder path; callers building a whole layout should load
/// one snapshot up front rather than re-reading the store per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongPressSettings {
    /// Enabled categories, most visible first. Categories missing here are
    /// disabled and their popup entries are dropped.
    pub current_order: Vec<KeyCategory>,
    /// Whether popup hints are drawn on the key face.
    pub show_hints: bool,
}

/// Errors from reading the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// TOML representation of the settings file. Field names match the persisted
/// setting keys of the keyboard, not Rust conventions.
#[derive(Debug, Clone, Deserialize, Default)]
struct SettingsToml {
    #[serde(default, rename = "longPressKeyOrdering")]
    long_press_key_ordering: Option<String>,

    #[serde(default, rename = "showKeyHints")]
    show_key_hints: Option<bool>,
}

impl Default for LongPressSettings {
    fn default() -> Self {
        Self {
            current_order: default_order().to_vec(),
            show_hints: true,
        }
    }
}

impl LongPressSettings {
    pub fn new(current_order: Vec<KeyCategory>, show_hints: bool) -> Self {
        Self {
            current_order,
            show_hints,
        }
    }

    /// Fixed, non-persisted settings value for deterministic tests.
    pub fn for_test() -> Self {
        Self::new(
            vec![
                KeyCategory::Numbers,
                KeyCategory::LanguageKeys,
                KeyCategory::MiscLetters,
            ],
            false,
        )
    }

    /// Load settings from a TOML string. Missing keys fall back to their
    /// defaults; malformed ordering entries are dropped during decode.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let current_order = match parsed.long_press_key_ordering {
            Some(encoded) => decode_order(&encoded),
            None => default_order().to_vec(),
        };
        let settings = Self::new(current_order, parsed.show_key_hints.unwrap_or(true));
        log::debug!(
            "loaded long-press settings: order={}, hints={}",
            settings.encoded_order(),
            settings.show_hints
        );
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("morekeys").join("settings.toml"))
    }

    /// Load from the default location (~/.config/morekeys/settings.toml),
    /// falling back to the built-in defaults when no file exists.
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// The persisted form of the current category order.
    pub fn encoded_order(&self) -> String {
        encode_order(&self.current_order)
    }

    /// Reorder one key's popup tokens under this preference.
    pub fn reorder(&self, specs: &[String]) -> Vec<String> {
        reorder_key_specs(specs, &self.current_order)
    }

    /// Reorder a joined popup string, returning the re-joined result.
    pub fn reorder_joined(&self, raw: &str) -> String {
        join_key_specs(&self.reorder(&split_key_specs(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = LongPressSettings::default();
        assert_eq!(settings.current_order, default_order().to_vec());
        assert!(settings.show_hints);
        assert_eq!(settings.encoded_order(), "1,0,2,3,4");
    }

    #[test]
    fn test_for_test_is_fixed() {
        let settings = LongPressSettings::for_test();
        assert_eq!(
            settings.current_order,
            vec![
                KeyCategory::Numbers,
                KeyCategory::LanguageKeys,
                KeyCategory::MiscLetters
            ]
        );
        assert!(!settings.show_hints);
    }

    #[test]
    fn test_from_toml_full() {
        let toml = r#"
longPressKeyOrdering = "4,3"
showKeyHints = false
"#;
        let settings = LongPressSettings::from_toml(toml).unwrap();
        assert_eq!(
            settings.current_order,
            vec![KeyCategory::MiscLetters, KeyCategory::QuickActions]
        );
        assert!(!settings.show_hints);
    }

    #[test]
    fn test_from_toml_missing_keys_use_defaults() {
        let settings = LongPressSettings::from_toml("").unwrap();
        assert_eq!(settings, LongPressSettings::default());
    }

    #[test]
    fn test_from_toml_malformed_ordering_degrades() {
        let toml = r#"longPressKeyOrdering = "1,x,9,3""#;
        let settings = LongPressSettings::from_toml(toml).unwrap();
        assert_eq!(
            settings.current_order,
            vec![KeyCategory::LanguageKeys, KeyCategory::QuickActions]
        );
    }

    #[test]
    fn test_from_toml_parse_error() {
        let result = LongPressSettings::from_toml("longPressKeyOrdering = [");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_reorder_joined_end_to_end() {
        let settings = LongPressSettings::default();
        let reordered =
            settings.reorder_joined("!text/morekeys_a,!text/qwertysyms_a,!text/number_1");
        assert_eq!(
            reordered,
            "!text/morekeys_a,!text/number_1,!text/qwertysyms_a,!text/actions_a,!text/morekeys_misc_a"
        );
    }

    #[test]
    fn test_reorder_joined_empty_input() {
        let settings = LongPressSettings::default();
        assert_eq!(settings.reorder_joined(""), "");
    }
}
