//! Response selector.
//!
//! Turns one piece of user text into exactly one canned reply. The persona is
//! scripted: apart from the command prefix and the sensitivity keywords the
//! content of the input is never inspected.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DEFAULT_OVERLAY_DURATION_MS, MomoConfig};
use crate::error::Result;
use crate::language::Language;
use crate::sensitivity::SensitivityDetector;
use crate::slash_command::{CommandName, parse_command};
use crate::template::{TemplateId, TemplateStore};

/// Side effect the caller should perform alongside a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyEffect {
    /// Show the full-screen overlay, then hide it after `duration`.
    Overlay { duration: Duration },
}

/// The assistant's answer to one user utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub effect: Option<ReplyEffect>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            effect: None,
        }
    }

    pub fn overlay_duration(&self) -> Option<Duration> {
        match self.effect {
            Some(ReplyEffect::Overlay { duration }) => Some(duration),
            None => None,
        }
    }
}

/// Stateless dispatcher from text to reply.
#[derive(Debug, Clone)]
pub struct Responder {
    templates: Arc<TemplateStore>,
    sensitivity: SensitivityDetector,
    overlay_duration: Duration,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            templates: Arc::new(TemplateStore::default()),
            sensitivity: SensitivityDetector::default(),
            overlay_duration: Duration::from_millis(DEFAULT_OVERLAY_DURATION_MS),
        }
    }
}

impl Responder {
    pub fn new(
        templates: Arc<TemplateStore>,
        sensitivity: SensitivityDetector,
        overlay_duration: Duration,
    ) -> Self {
        Self {
            templates,
            sensitivity,
            overlay_duration,
        }
    }

    /// Builds a responder from configuration.
    ///
    /// # Errors
    ///
    /// Fails when a template override is invalid.
    pub fn from_config(config: &MomoConfig) -> Result<Self> {
        let templates = TemplateStore::builtin().with_overrides(config.template_overrides.clone())?;
        Ok(Self::new(
            Arc::new(templates),
            SensitivityDetector::with_extra_keywords(config.sensitivity.extra_keywords.clone()),
            config.overlay_duration(),
        ))
    }

    pub fn templates(&self) -> &Arc<TemplateStore> {
        &self.templates
    }

    /// Selects the reply for `text` in `language`.
    ///
    /// Decision order, first match wins:
    /// 1. slash input: the matching command template, or the acknowledgment
    ///    for an unknown command;
    /// 2. anything else: the three-view conclusion, with the caution suffix
    ///    when the text touches a sensitive topic.
    pub fn respond(&self, text: &str, language: Language) -> Reply {
        let text = text.trim();

        match parse_command(text) {
            Some(command) => {
                tracing::debug!(%command, %language, "slash command");
                self.command_reply(command, language)
            }
            None => Reply::text(self.three_view(text, language)),
        }
    }

    fn command_reply(&self, command: CommandName, language: Language) -> Reply {
        let template = |id| self.templates.text(id, language).to_string();
        match command {
            CommandName::TriLines => Reply::text(template(TemplateId::TriLines)),
            CommandName::Challenge => Reply::text(template(TemplateId::Challenge)),
            CommandName::Checklist => Reply::text(template(TemplateId::Checklist)),
            CommandName::Light => Reply {
                text: template(TemplateId::LightAck),
                effect: Some(ReplyEffect::Overlay {
                    duration: self.overlay_duration,
                }),
            },
            CommandName::Unknown => Reply::text(template(TemplateId::Acknowledge)),
        }
    }

    /// Fixed header, three views, blank line, three action lines.
    fn three_view(&self, text: &str, language: Language) -> String {
        let t = |id| self.templates.text(id, language);

        let mut out = format!(
            "{}\n{}\n{}\n{}\n\n{}\n{}\n{}",
            t(TemplateId::ThreeViewHeader),
            t(TemplateId::RationalView),
            t(TemplateId::EmotionalView),
            t(TemplateId::SystemicView),
            t(TemplateId::NextAction),
            t(TemplateId::Metric),
            t(TemplateId::ReviewWhen),
        );

        let sensitive = self.sensitivity.is_sensitive(text);
        tracing::debug!(sensitive, %language, "three-view conclusion");
        if sensitive {
            out.push_str("\n\n");
            out.push_str(t(TemplateId::Caution));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(reply: &Reply) -> Vec<&str> {
        reply.text.lines().collect()
    }

    #[test]
    fn test_three_view_shape_is_fixed() {
        let responder = Responder::default();
        let reply = responder.respond("I can't decide between two jobs", Language::En);
        let lines = lines(&reply);

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "[Three-View Conclusion]");
        assert!(lines[1].starts_with("Rational View:"));
        assert!(lines[2].starts_with("Emotional View:"));
        assert!(lines[3].starts_with("Systemic/Long-term View:"));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("Next-1:"));
        assert!(lines[6].starts_with("Metric:"));
        assert!(lines[7].starts_with("When:"));
        assert!(reply.effect.is_none());
    }

    #[test]
    fn test_three_view_ignores_input_content() {
        let responder = Responder::default();
        let a = responder.respond("我的貓不理我", Language::Zh);
        let b = responder.respond("要不要換工作", Language::Zh);
        assert_eq!(a, b);
        assert!(a.text.starts_with("【三視點結論】\n理性結論:"));
    }

    #[test]
    fn test_caution_suffix_only_when_sensitive() {
        let responder = Responder::default();

        let sensitive = responder.respond("投資是不是個好主意", Language::Zh);
        assert!(sensitive.text.ends_with("\n\n(僅供參考,不取代專業意見)"));

        let plain = responder.respond("今天好累", Language::Zh);
        assert!(!plain.text.contains("僅供參考"));
        assert!(sensitive.text.starts_with(&plain.text));
    }

    #[test]
    fn test_caution_follows_language() {
        let responder = Responder::default();
        let reply = responder.respond("股票要不要賣", Language::En);
        assert!(reply
            .text
            .ends_with("(For reference only, not professional advice)"));
    }

    #[test]
    fn test_tri_lines_verbatim() {
        let responder = Responder::default();
        assert_eq!(
            responder.respond("/tri-lines", Language::En).text,
            "Three Lines:\n• Next-1: do the step that cuts ~20% loss.\n• Metric: track with observable indicator.\n• When: review in a week."
        );
        assert_eq!(
            responder.respond("/三行收斂", Language::Zh).text,
            "三行收斂:\n• Next-1:先做能降耗損 20% 的動作。\n• Metric:以「可觀察」指標追蹤。\n• When:一週後重新評估。"
        );
    }

    #[test]
    fn test_every_default_keyword_adds_caution() {
        let responder = Responder::default();
        for keyword in crate::sensitivity::DEFAULT_SENSITIVE_KEYWORDS {
            let text = format!("關於{}的問題", keyword);
            for language in [Language::Zh, Language::En] {
                let reply = responder.respond(&text, language);
                assert!(
                    reply
                        .text
                        .ends_with(TemplateStore::builtin().text(TemplateId::Caution, language)),
                    "no caution for {:?}",
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_native_alias_works_in_english() {
        let responder = Responder::default();
        assert_eq!(
            responder.respond("/檢查表", Language::En),
            responder.respond("/checklist", Language::En)
        );
    }

    #[test]
    fn test_checklist_has_four_points() {
        let responder = Responder::default();
        let reply = responder.respond("/checklist", Language::En);
        assert_eq!(
            reply.text,
            TemplateStore::builtin().text(TemplateId::Checklist, Language::En)
        );
        let points = reply
            .text
            .lines()
            .filter(|l| {
                l.split_once(") ")
                    .is_some_and(|(n, _)| n.parse::<u8>().is_ok())
            })
            .count();
        assert_eq!(points, 4);
    }

    #[test]
    fn test_challenge_template() {
        let responder = Responder::default();
        let reply = responder.respond("/challenge", Language::En);
        assert!(reply.text.contains("Risk:"));
        assert!(reply.text.contains("Tradeoff:"));
    }

    #[test]
    fn test_unknown_command_fallback_is_identical() {
        let responder = Responder::default();
        let a = responder.respond("/unknowncmd", Language::En);
        let b = responder.respond("/投資", Language::En);
        assert_eq!(a.text, "Got it. I'm listening.");
        assert_eq!(a, b);
        // Sensitivity is never applied to slash input.
        assert!(!b.text.contains("reference only"));
    }

    #[test]
    fn test_light_signals_overlay() {
        let responder = Responder::default();
        let reply = responder.respond("/light", Language::Zh);
        assert_eq!(reply.text, "點亮儀式已啟動。");
        assert_eq!(reply.overlay_duration(), Some(Duration::from_millis(3000)));

        let en = responder.respond("/light", Language::En);
        assert_eq!(en.text, "Light ritual triggered.");
        assert_eq!(en.effect, reply.effect);
    }

    #[test]
    fn test_only_light_carries_effect() {
        let responder = Responder::default();
        for input in ["/tri-lines", "/challenge", "/checklist", "/nope", "hello"] {
            assert!(responder.respond(input, Language::En).effect.is_none(), "{}", input);
        }
    }

    #[test]
    fn test_from_config_applies_overrides_and_keywords() {
        let mut config = MomoConfig::default();
        config.overlay_duration_ms = 500;
        config.sensitivity.extra_keywords = vec!["invest".to_string()];
        config.template_overrides = vec![crate::template::TemplateEntry::new(
            TemplateId::Acknowledge,
            Language::En,
            "Heard you.",
        )];

        let responder = Responder::from_config(&config).unwrap();
        assert_eq!(responder.respond("/zzz", Language::En).text, "Heard you.");
        assert_eq!(
            responder.respond("/light", Language::En).overlay_duration(),
            Some(Duration::from_millis(500))
        );
        assert!(responder
            .respond("should I invest?", Language::En)
            .text
            .ends_with("(For reference only, not professional advice)"));
    }
}
