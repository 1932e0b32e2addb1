mod traits;
mod openai;

pub use traits::{Translator, TranslatorInfo};
pub use openai::OpenAiTranslator;

use crate::config::TranslatorConfig;
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Create a translator from configuration
pub fn create_translator(
    config: &TranslatorConfig,
    timeout: Duration,
) -> Result<Arc<dyn Translator>> {
    let translator = OpenAiTranslator::new(
        config.api_base.clone(),
        config.api_key.clone(),
        config.model.clone(),
        timeout,
    );

    Ok(Arc::new(translator))
}
