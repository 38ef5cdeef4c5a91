//! Generation client configuration.
//!
//! The API key and model selection are resolved into an explicit
//! [`GenAiConfig`] value passed to the client; nothing is read from process
//! globals after resolution. The environment variable wins over the config
//! file, matching the usual override order for CLI tools.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Used when the model listing yields nothing usable.
pub const FALLBACK_MODEL: &str = "models/gemini-1.5-flash";

const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    model: Option<String>,
    api_base: Option<String>,
}

/// Resolved settings for the text-generation collaborator.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    pub api_key: String,
    /// Explicit model override; `None` means auto-scan the model list.
    pub model: Option<String>,
    pub api_base: String,
}

impl GenAiConfig {
    /// Resolve from `GEMINI_API_KEY` and the optional config file, with an
    /// optional model override from the command line.
    pub fn resolve(model_override: Option<String>) -> Result<Self> {
        let file = load_file_config()?;
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or(file.api_key)
            .ok_or_else(|| {
                anyhow!(
                    "no API key: set {API_KEY_ENV} or add api_key to {}",
                    config_path_display()
                )
            })?;
        Ok(Self {
            api_key,
            model: model_override.or(file.model),
            api_base: file.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        })
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("surat").join("config.json"))
}

fn config_path_display() -> String {
    config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<config dir unavailable>".to_string())
}

fn load_file_config() -> Result<FileConfig> {
    let Some(path) = config_path() else {
        return Ok(FileConfig::default());
    };
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
