//! Message templates, one per notification type.

use std::collections::HashMap;
use thiserror::Error;

use super::NotificationType;

/// Marker replaced by the formatted actor list.
pub const PLACEHOLDER: &str = "%s";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template for {name} must contain exactly one '%s' placeholder, found {found}")]
    Placeholder { name: &'static str, found: usize },
}

/// Template table, maintained independently from the type vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    templates: HashMap<NotificationType, String>,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        let templates = [
            (NotificationType::PostAnswer, "%s answered a question"),
            (NotificationType::PostComment, "%s commented on a question"),
            (NotificationType::UpvoteAnswer, "%s upvoted your answer"),
            (
                NotificationType::AnswerAudience,
                "%s also answered in same question",
            ),
            (
                NotificationType::CommentAudience,
                "%s also commented in same answer",
            ),
        ]
        .into_iter()
        .map(|(t, template)| (t, template.to_string()))
        .collect();
        Self { templates }
    }
}

impl MessageTemplates {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn get(&self, notification_type: NotificationType) -> Option<&str> {
        self.templates.get(&notification_type).map(String::as_str)
    }

    /// Installs a template, rejecting it unless it has exactly one placeholder.
    pub fn set(
        &mut self,
        notification_type: NotificationType,
        template: impl Into<String>,
    ) -> Result<(), TemplateError> {
        let template = template.into();
        let found = template.matches(PLACEHOLDER).count();
        if found != 1 {
            return Err(TemplateError::Placeholder {
                name: notification_type.name(),
                found,
            });
        }
        self.templates.insert(notification_type, template);
        Ok(())
    }

    pub fn remove(&mut self, notification_type: NotificationType) -> Option<String> {
        self.templates.remove(&notification_type)
    }

    pub fn render(&self, notification_type: NotificationType, actors: &str) -> Option<String> {
        self.get(notification_type)
            .map(|template| template.replacen(PLACEHOLDER, actors, 1))
    }
}
