//! Notification service driving one aggregation pass for one user

use tracing::{debug, info, warn};

use super::{
    Aggregator, Audience, EventValidator, MergeRequest, MessageTemplates, NotificationStore,
    PresentationSettings, Presenter, Reporter, Verdict,
};
use crate::events::{Event, Id};

/// Validates, aggregates and renders the notifications of a single user.
pub struct NotificationService {
    templates: MessageTemplates,
    settings: PresentationSettings,
}

impl NotificationService {
    pub fn new(templates: MessageTemplates, settings: PresentationSettings) -> Self {
        Self {
            templates,
            settings,
        }
    }

    /// Runs the merge phase over `events`, which must be sorted by `created_at`.
    ///
    /// Rejected events are reported and skipped; the pass never stops early.
    pub fn aggregate(
        &self,
        events: &[Event],
        user_id: &Id,
        reporter: &mut dyn Reporter,
    ) -> NotificationStore {
        let validator = EventValidator::new(&self.templates, user_id);
        let mut aggregator = Aggregator::new();
        let mut previous_created_at = None;

        for event in events {
            if previous_created_at.is_some_and(|previous| event.created_at < previous) {
                warn!(
                    "Event from {} to {} is older than its predecessor",
                    event.sender_id, event.receiver_id
                );
            }
            previous_created_at = Some(event.created_at);

            let notification_type = match validator.validate(event) {
                Verdict::Accept(notification_type) => notification_type,
                Verdict::Skip(reason) => {
                    debug!(
                        "Skipping event from {} to {}: {:?}",
                        event.sender_id, event.receiver_id, reason
                    );
                    continue;
                }
                Verdict::Reject(err) => {
                    reporter.error(&err);
                    continue;
                }
            };

            let primary = aggregator
                .merge_event(MergeRequest::from_event(event, notification_type))
                .clone();

            if let Err(err) = aggregator.expand_audience(&primary) {
                warn!("Not expanding audience of target {}: {}", primary.target_id, err);
                reporter.error(&err);
            }
        }

        let store = aggregator.into_store();
        info!(
            "Aggregated {} events into {} notifications",
            events.len(),
            store.len()
        );
        store
    }

    /// Aggregates `events` and reports the rendered notifications.
    pub fn notifications_for_user(
        &self,
        events: &[Event],
        user_id: &Id,
        reporter: &mut dyn Reporter,
    ) -> NotificationStore {
        let store = self.aggregate(events, user_id, reporter);

        let presenter = Presenter::new(
            &self.templates,
            self.settings.format,
            self.settings.timezone,
        );
        let audience = if self.settings.all_receivers {
            Audience::Everyone
        } else {
            Audience::Receiver(user_id)
        };
        let emitted = presenter.present(&store, audience, reporter);
        info!("Reported {} notifications for user {}", emitted, user_id);

        store
    }
}
