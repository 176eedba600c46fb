use anyhow::Result;
use momo_core::template::{TemplateId, TemplateStore};
use momo_core::{Language, MomoConfig};

pub fn run(config: &MomoConfig, lang: Option<Language>) -> Result<String> {
    let language = lang.unwrap_or(config.default_language);
    let templates = TemplateStore::builtin().with_overrides(config.template_overrides.clone())?;
    Ok(templates.text(TemplateId::SystemPrompt, language).to_string())
}
