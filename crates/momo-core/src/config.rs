//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default, so an absent or empty file yields the shipped behaviour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::template::TemplateEntry;

/// How long the light overlay stays on screen.
pub const DEFAULT_OVERLAY_DURATION_MS: u64 = 3000;

/// Flag-store key guarding the candle ritual.
pub const DEFAULT_CANDLE_FLAG_KEY: &str = "momochao.candle_lit";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MomoConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_overlay_duration_ms")]
    pub overlay_duration_ms: u64,
    #[serde(default = "default_candle_flag_key")]
    pub candle_flag_key: String,
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
    #[serde(default, rename = "template_override")]
    pub template_overrides: Vec<TemplateEntry>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SensitivityConfig {
    /// Keywords added to the built-in list
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

fn default_overlay_duration_ms() -> u64 {
    DEFAULT_OVERLAY_DURATION_MS
}

fn default_candle_flag_key() -> String {
    DEFAULT_CANDLE_FLAG_KEY.to_string()
}

impl Default for MomoConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            overlay_duration_ms: DEFAULT_OVERLAY_DURATION_MS,
            candle_flag_key: default_candle_flag_key(),
            sensitivity: SensitivityConfig::default(),
            template_overrides: Vec::new(),
        }
    }
}

impl MomoConfig {
    pub fn overlay_duration(&self) -> Duration {
        Duration::from_millis(self.overlay_duration_ms)
    }
}
