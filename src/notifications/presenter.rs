//! Rendering of stored notifications into output lines.

use chrono::{DateTime, Local, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    MessageTemplates, NotificationRecord, NotificationStore, NotificationType, Reporter,
    ValidationError,
};
use crate::events::Id;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Zone used when rendering timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampZone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationSettings {
    pub format: OutputFormat,
    pub timezone: TimestampZone,
    /// Render every record instead of only the requested user's.
    pub all_receivers: bool,
}

/// Which records get rendered.
#[derive(Debug, Clone, Copy)]
pub enum Audience<'a> {
    Receiver(&'a Id),
    Everyone,
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Template(#[from] ValidationError),

    #[error("failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct RenderedNotification<'a> {
    receiver_id: &'a Id,
    notification_type: NotificationType,
    target_id: &'a Id,
    target_type: &'a str,
    trigger_id: &'a Id,
    actor_ids: &'a [Id],
    created_at: String,
    message: String,
}

/// Formats the distinct actors of a record.
///
/// More than two actors collapse to the two most recently added ones plus a
/// count of the rest; otherwise all actors are joined with `", and "`.
pub fn format_actors(actors: &[Id]) -> String {
    if actors.len() > 2 {
        let last = &actors[actors.len() - 1];
        let second_to_last = &actors[actors.len() - 2];
        format!("{}, {} and {} others", second_to_last, last, actors.len() - 2)
    } else {
        actors
            .iter()
            .map(Id::as_str)
            .collect::<Vec<_>>()
            .join(", and ")
    }
}

pub fn format_timestamp(created_at: &DateTime<Utc>, timezone: TimestampZone) -> String {
    match timezone {
        TimestampZone::Utc => created_at.format(TIMESTAMP_FORMAT).to_string(),
        TimestampZone::Local => created_at
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    }
}

pub struct Presenter<'a> {
    templates: &'a MessageTemplates,
    format: OutputFormat,
    timezone: TimestampZone,
}

impl<'a> Presenter<'a> {
    pub fn new(
        templates: &'a MessageTemplates,
        format: OutputFormat,
        timezone: TimestampZone,
    ) -> Self {
        Self {
            templates,
            format,
            timezone,
        }
    }

    pub fn message(&self, record: &NotificationRecord) -> Result<String, ValidationError> {
        self.templates
            .render(record.notification_type, &format_actors(&record.actor_ids))
            .ok_or_else(|| ValidationError::MissingTemplate(record.notification_type.id()))
    }

    pub fn render(&self, record: &NotificationRecord) -> Result<String, PresentError> {
        let message = self.message(record)?;
        let created_at = format_timestamp(&record.created_at, self.timezone);

        match self.format {
            OutputFormat::Text => Ok(format!(
                "[{}] Receiver: {}, Message: {}",
                created_at, record.receiver_id, message
            )),
            OutputFormat::Json => Ok(serde_json::to_string(&RenderedNotification {
                receiver_id: &record.receiver_id,
                notification_type: record.notification_type,
                target_id: &record.target_id,
                target_type: &record.target_type,
                trigger_id: &record.trigger_id,
                actor_ids: &record.actor_ids,
                created_at,
                message,
            })?),
        }
    }

    /// Renders the selected records in store order. Returns how many lines were emitted.
    pub fn present(
        &self,
        store: &NotificationStore,
        audience: Audience<'_>,
        reporter: &mut dyn Reporter,
    ) -> usize {
        let records: Box<dyn Iterator<Item = &NotificationRecord> + '_> = match audience {
            Audience::Receiver(receiver_id) => Box::new(store.records_for(receiver_id)),
            Audience::Everyone => Box::new(store.iter()),
        };

        let mut emitted = 0;
        for record in records {
            match self.render(record) {
                Ok(line) => {
                    reporter.notification(&line);
                    emitted += 1;
                }
                Err(err) => reporter.error(&err),
            }
        }
        emitted
    }
}
