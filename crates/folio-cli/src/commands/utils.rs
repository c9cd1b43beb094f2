use anyhow::Result;
use folio_core::config;
use folio_core::content::{PromptContext, sample};
use folio_interaction::PromptContextLoader;
use std::path::Path;

/// Loads the prompt context from the configured content endpoints.
///
/// Endpoint URLs come from `config.toml` with `FOLIO_*_URL` environment
/// overrides. When `use_fallback` is set, sections the live API left empty
/// are filled from the bundled sample content — an explicit caller policy,
/// never inferred by the loader.
pub async fn load_context(config_dir: Option<&Path>, use_fallback: bool) -> Result<PromptContext> {
    let config = config::load_config(config_dir)?;
    let endpoints = config.endpoints.with_env_overrides();

    let context = PromptContextLoader::new(endpoints).load().await;

    if use_fallback {
        Ok(context.or_fallback(&sample::context()))
    } else {
        Ok(context)
    }
}
