use std::sync::Arc;

use anyhow::Result;
use momo_core::ritual::{CandleRitual, FlagStore, RitualOutcome};
use momo_core::template::TemplateStore;
use momo_core::{Language, MomoConfig};
use momo_infrastructure::TomlFlagStore;

pub fn default_store() -> Result<Arc<dyn FlagStore>> {
    Ok(Arc::new(TomlFlagStore::new()?))
}

fn ritual(config: &MomoConfig, store: Arc<dyn FlagStore>) -> Result<CandleRitual> {
    let templates = Arc::new(TemplateStore::builtin().with_overrides(config.template_overrides.clone())?);
    Ok(CandleRitual::from_config(store, templates, config))
}

pub fn light(
    config: &MomoConfig,
    store: Arc<dyn FlagStore>,
    lang: Option<Language>,
) -> Result<String> {
    let language = lang.unwrap_or(config.default_language);
    let ritual = ritual(config, store)?;
    let output = match ritual.light(language)? {
        RitualOutcome::Lit { overlay, closing } => format!(
            "{}\n[{} ({} ms)]\n{}",
            ritual.prompt(language),
            overlay.message,
            overlay.duration.as_millis(),
            closing
        ),
        RitualOutcome::AlreadyLit { notice } => notice,
    };
    Ok(output)
}

pub fn reset(config: &MomoConfig, store: Arc<dyn FlagStore>) -> Result<String> {
    let ritual = ritual(config, store)?;
    ritual.reset()?;
    Ok(format!("Cleared flag '{}'.", ritual.flag_key()))
}
