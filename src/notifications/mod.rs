//! Notification aggregation: validation, deduplication, audience expansion and rendering.

mod aggregator;
mod models;
mod presenter;
mod report;
mod service;
mod store;
mod templates;
mod validator;

pub use aggregator::{Aggregator, ExpansionError, MergeRequest};
pub use models::{AudienceRule, NotificationKey, NotificationRecord, NotificationType};
pub use presenter::{
    format_actors, format_timestamp, Audience, OutputFormat, PresentError, PresentationSettings,
    Presenter, TimestampZone,
};
pub use report::{MemoryReporter, Reporter, StdoutReporter};
pub use service::NotificationService;
pub use store::NotificationStore;
pub use templates::{MessageTemplates, TemplateError, PLACEHOLDER};
pub use validator::{EventValidator, SkipReason, ValidationError, Verdict};
