//! Display language selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Language used to pick the localized template set.
///
/// Parsed from and displayed as its lowercase code (`zh`, `en`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    /// Traditional Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Language {
    /// Human-readable label, as shown in a language picker.
    pub fn label(self) -> &'static str {
        match self {
            Language::Zh => "繁中",
            Language::En => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_and_display_round_trip_codes() {
        assert_eq!(Language::from_str("zh").unwrap(), Language::Zh);
        assert_eq!(Language::from_str("EN").unwrap(), Language::En);
        assert_eq!(Language::En.to_string(), "en");
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Language::default(), Language::Zh);
        assert_eq!(Language::iter().count(), 2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::Zh.label(), "繁中");
        assert_eq!(Language::En.label(), "English");
    }
}
