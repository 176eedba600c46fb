//! Topic sensitivity detection.
//!
//! Finance, medical, legal, divination and gambling topics get a
//! "for reference only" suffix. Detection is plain substring matching.

/// Keywords shipped with the persona.
pub const DEFAULT_SENSITIVE_KEYWORDS: &[&str] = &[
    "投資", "股票", "醫", "藥", "健康", "法律", "官司", "命理", "占卜", "賭",
];

/// Decides whether a piece of user text touches a sensitive topic.
///
/// The keyword set does not depend on the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitivityDetector {
    keywords: Vec<String>,
}

impl Default for SensitivityDetector {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_SENSITIVE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl SensitivityDetector {
    /// Detector using exactly `keywords`. Blank entries are ignored.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| !k.trim().is_empty())
            .collect();
        Self { keywords }
    }

    /// Default keywords plus `extra`, without duplicates.
    pub fn with_extra_keywords<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut detector = Self::default();
        for keyword in extra {
            let keyword = keyword.into();
            if !keyword.trim().is_empty() && !detector.keywords.contains(&keyword) {
                detector.keywords.push(keyword);
            }
        }
        detector
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_sensitive(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}
