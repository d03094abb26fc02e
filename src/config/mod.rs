mod file_config;

pub use file_config::{FileConfig, TemplatesConfig};

use crate::notifications::{
    MessageTemplates, NotificationType, OutputFormat, PresentationSettings, TimestampZone,
};
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "app.log";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub log_dir: Option<PathBuf>,
    pub all_receivers: bool,
    pub format: OutputFormat,
    pub timezone: TimestampZone,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub dir: PathBuf,
    pub file_name: String,
    /// Mirror log records to stderr.
    pub verbose: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: DEFAULT_LOG_FILE.to_string(),
            verbose: false,
        }
    }
}

impl LogSettings {
    /// Settings usable before the config file has been read.
    pub fn from_cli(cli: &CliConfig) -> Self {
        Self {
            dir: cli.log_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            verbose: cli.verbose,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log: LogSettings,
    pub presentation: PresentationSettings,
    pub templates: MessageTemplates,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let log_defaults = LogSettings::from_cli(cli);
        let log = LogSettings {
            dir: file.log_dir.map(PathBuf::from).unwrap_or(log_defaults.dir),
            file_name: file.log_file.unwrap_or(log_defaults.file_name),
            verbose: log_defaults.verbose,
        };
        if log.file_name.trim().is_empty() {
            return Err(anyhow!("log_file must not be empty"));
        }

        let format = match file.format {
            Some(s) => parse_value_enum::<OutputFormat>(&s, "format")?,
            None => cli.format,
        };
        let timezone = match file.timezone {
            Some(s) => parse_value_enum::<TimestampZone>(&s, "timezone")?,
            None => cli.timezone,
        };
        let all_receivers = file.all_receivers.unwrap_or(cli.all_receivers);

        let templates = resolve_templates(file.templates.unwrap_or_default())?;

        Ok(Self {
            log,
            presentation: PresentationSettings {
                format,
                timezone,
                all_receivers,
            },
            templates,
        })
    }
}

/// Parses a config string into a clap value enum, case insensitive.
fn parse_value_enum<T: ValueEnum>(s: &str, field: &str) -> Result<T> {
    T::from_str(s, true).map_err(|_| anyhow!("Invalid {} in config file: {:?}", field, s))
}

fn resolve_templates(overrides: TemplatesConfig) -> Result<MessageTemplates> {
    let mut templates = MessageTemplates::default();
    let entries = [
        (NotificationType::PostAnswer, overrides.post_answer),
        (NotificationType::PostComment, overrides.post_comment),
        (NotificationType::UpvoteAnswer, overrides.upvote_answer),
        (NotificationType::AnswerAudience, overrides.answer_audience),
        (NotificationType::CommentAudience, overrides.comment_audience),
    ];
    for (notification_type, template) in entries {
        if let Some(template) = template {
            templates.set(notification_type, template)?;
        }
    }
    Ok(templates)
}
