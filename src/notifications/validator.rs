//! Per-event validation.
//!
//! Decides, for every incoming event, whether it is merged, silently skipped or
//! rejected with an error. Rejections never abort the run.

use thiserror::Error;

use super::{MessageTemplates, NotificationType};
use crate::events::{Event, Id};

/// Reasons an event is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("notification_type_id {0} is not supported")]
    UnsupportedType(i64),

    #[error("message of notification_type_id {0} is not found")]
    MissingTemplate(i64),
}

/// Events that are dropped without being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SelfAction,
    OtherReceiver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept(NotificationType),
    Skip(SkipReason),
    Reject(ValidationError),
}

pub struct EventValidator<'a> {
    templates: &'a MessageTemplates,
    user_id: &'a Id,
}

impl<'a> EventValidator<'a> {
    pub fn new(templates: &'a MessageTemplates, user_id: &'a Id) -> Self {
        Self { templates, user_id }
    }

    pub fn validate(&self, event: &Event) -> Verdict {
        if event.receiver_id == event.sender_id {
            return Verdict::Skip(SkipReason::SelfAction);
        }
        if &event.receiver_id != self.user_id {
            return Verdict::Skip(SkipReason::OtherReceiver);
        }

        let type_id = event.notification_type_id;
        let Some(notification_type) = NotificationType::from_id(type_id) else {
            return Verdict::Reject(ValidationError::UnsupportedType(type_id));
        };
        if self.templates.get(notification_type).is_none() {
            return Verdict::Reject(ValidationError::MissingTemplate(type_id));
        }

        Verdict::Accept(notification_type)
    }
}
