use anyhow::{Result, bail};
use momo_core::template::TemplateId;
use momo_core::{Language, MomoConfig, Responder};

/// Renders the reply to `text`, preceded by the overlay line when the reply
/// carries one.
///
/// Blank text never reaches the responder.
pub fn run(config: &MomoConfig, lang: Option<Language>, text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        bail!("nothing to respond to: message text is blank");
    }
    let language = lang.unwrap_or(config.default_language);
    let responder = Responder::from_config(config)?;
    let reply = responder.respond(text, language);

    match reply.overlay_duration() {
        Some(duration) => {
            let overlay = responder
                .templates()
                .text(TemplateId::OverlayMessage, language);
            Ok(format!(
                "[{} ({} ms)]\n{}",
                overlay,
                duration.as_millis(),
                reply.text
            ))
        }
        None => Ok(reply.text),
    }
}
