//! Configuration file management for Folio.
//!
//! Two files live under `~/.config/folio/`:
//!
//! - `config.toml` — content endpoint URLs, one per content category.
//! - `secret.json` — the Gemini API key and optional model override.
//!
//! Environment variables take precedence over both files so that deployments
//! can be configured without touching the filesystem. Loaded values are
//! passed explicitly into the loader and session at construction time; there
//! is no global state.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable carrying the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the Gemini model name.
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL_NAME";

/// Endpoint URLs for the five content sources.
///
/// Every field is optional; an unconfigured source simply contributes no
/// content to the system prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEndpoints {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub projects: Option<String>,
    #[serde(default)]
    pub articles: Option<String>,
    #[serde(default)]
    pub blogs: Option<String>,
    #[serde(default)]
    pub courses: Option<String>,
}

impl ContentEndpoints {
    /// Returns true when no endpoint is configured at all.
    pub fn is_empty(&self) -> bool {
        self.skills.is_none()
            && self.projects.is_none()
            && self.articles.is_none()
            && self.blogs.is_none()
            && self.courses.is_none()
    }

    /// Applies `FOLIO_*_URL` environment overrides on top of file values.
    pub fn with_env_overrides(mut self) -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        if let Some(url) = var("FOLIO_SKILL_URL") {
            self.skills = Some(url);
        }
        if let Some(url) = var("FOLIO_PROJECT_URL") {
            self.projects = Some(url);
        }
        if let Some(url) = var("FOLIO_ARTICLE_URL") {
            self.articles = Some(url);
        }
        if let Some(url) = var("FOLIO_BLOG_URL") {
            self.blogs = Some(url);
        }
        if let Some(url) = var("FOLIO_COURSE_URL") {
            self.courses = Some(url);
        }
        self
    }
}

/// Root structure of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigRoot {
    #[serde(default)]
    pub endpoints: ContentEndpoints,
}

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Returns the configuration directory: `~/.config/folio`.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| FolioError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("folio"))
}

/// Loads `config.toml` from the given directory (or the default location),
/// returning defaults when the file does not exist.
pub fn load_config(base_dir: Option<&Path>) -> Result<ConfigRoot> {
    let dir = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => config_dir()?,
    };
    let path = dir.join("config.toml");

    if !path.exists() {
        return Ok(ConfigRoot::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        FolioError::io(format!(
            "Failed to read configuration file at {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(toml::from_str(&content)?)
}

/// Loads `secret.json` from the given directory (or the default location).
///
/// Error messages never include the key material itself. A missing file is
/// reported as a `Config` error so callers can degrade to the fixed
/// "not configured" behavior.
pub fn load_secret_config(base_dir: Option<&Path>) -> Result<SecretConfig> {
    let dir = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => config_dir()?,
    };
    let path = dir.join("secret.json");

    if !path.exists() {
        return Err(FolioError::config(format!(
            "Secret file not found at: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        FolioError::io(format!(
            "Failed to read secret file at {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(serde_json::from_str(&content)?)
}

/// Resolves the Gemini configuration.
///
/// Priority:
/// 1. `secret.json` under the config directory
/// 2. `GEMINI_API_KEY` / `GEMINI_MODEL_NAME` environment variables
///
/// Returns `None` when neither source provides an API key. Callers must
/// treat `None` as "not configured" rather than an error.
pub fn resolve_gemini_config(base_dir: Option<&Path>) -> Option<GeminiConfig> {
    if let Ok(secret) = load_secret_config(base_dir) {
        if let Some(gemini) = secret.gemini {
            if !gemini.api_key.trim().is_empty() {
                return Some(gemini);
            }
        }
    }

    let api_key = env::var(GEMINI_API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())?;
    Some(GeminiConfig {
        api_key,
        model_name: env::var(GEMINI_MODEL_ENV).ok(),
    })
}
