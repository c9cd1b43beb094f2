use anyhow::Result;
use colored::Colorize;
use folio_interaction::build_system_prompt;
use std::path::Path;

use super::utils;

/// Loads the content context and prints the assembled system prompt.
///
/// Per-source record counts go to stderr so the prompt itself can be piped.
pub async fn run(config_dir: Option<&Path>, use_fallback: bool) -> Result<()> {
    let context = utils::load_context(config_dir, use_fallback).await?;

    eprintln!(
        "{}",
        format!(
            "sources: skills={} projects={} articles={} blogs={} courses={}",
            context.skills.len(),
            context.projects.len(),
            context.articles.len(),
            context.blogs.len(),
            context.courses.len()
        )
        .bright_black()
    );

    print!("{}", build_system_prompt(&context));
    Ok(())
}
