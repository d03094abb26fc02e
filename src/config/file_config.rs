use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub log_dir: Option<String>,
    pub log_file: Option<String>,
    pub all_receivers: Option<bool>,
    pub format: Option<String>,
    pub timezone: Option<String>,

    pub templates: Option<TemplatesConfig>,
}

/// Message template overrides, keyed by notification type name.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    pub post_answer: Option<String>,
    pub post_comment: Option<String>,
    pub upvote_answer: Option<String>,
    pub answer_audience: Option<String>,
    pub comment_audience: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
