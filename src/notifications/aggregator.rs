//! Create-or-merge aggregation and audience expansion.

use chrono::{DateTime, Utc};
use indexmap::map::Entry;
use thiserror::Error;
use tracing::debug;

use super::{
    AudienceRule, NotificationKey, NotificationRecord, NotificationStore, NotificationType,
};
use crate::events::{Event, Id};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("notification_type_id {} has no audience notification type", .0.id())]
    NoAudienceType(NotificationType),
}

/// One merge into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub receiver_id: Id,
    pub sender_id: Id,
    pub target_id: Id,
    pub target_type: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,
}

impl MergeRequest {
    pub fn from_event(event: &Event, notification_type: NotificationType) -> Self {
        Self {
            receiver_id: event.receiver_id.clone(),
            sender_id: event.sender_id.clone(),
            target_id: event.target_id.clone(),
            target_type: event.target_type.clone(),
            notification_type,
            created_at: event.created_at,
        }
    }
}

/// Owns the store for a single aggregation pass.
///
/// Callers must feed merges in ascending `created_at` order: the trigger and the
/// timestamp of a record always take the values of the latest merge.
#[derive(Debug, Default)]
pub struct Aggregator {
    store: NotificationStore,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    pub fn into_store(self) -> NotificationStore {
        self.store
    }

    /// Creates the record for the request's key or merges the request into it.
    pub fn merge_event(&mut self, request: MergeRequest) -> &NotificationRecord {
        let key = NotificationKey::new(
            request.receiver_id.clone(),
            request.target_id.clone(),
            request.notification_type,
        );

        match self.store.entry(key) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                record.absorb(request.sender_id, request.created_at);
                record
            }
            Entry::Vacant(entry) => entry.insert(NotificationRecord {
                receiver_id: request.receiver_id,
                target_id: request.target_id,
                target_type: request.target_type,
                notification_type: request.notification_type,
                trigger_id: request.sender_id.clone(),
                actor_ids: vec![request.sender_id],
                created_at: request.created_at,
            }),
        }
    }

    /// Tells every co-actor of `source` that its trigger actor also acted.
    ///
    /// Derived records are merged directly and never expanded themselves.
    /// Returns the number of derived merges.
    pub fn expand_audience(
        &mut self,
        source: &NotificationRecord,
    ) -> Result<usize, ExpansionError> {
        if source.actor_ids.len() < 2 {
            return Ok(0);
        }

        let audience_type = match source.notification_type.audience_rule() {
            AudienceRule::Derive(audience_type) => audience_type,
            AudienceRule::Never => return Ok(0),
            AudienceRule::Unsupported => {
                return Err(ExpansionError::NoAudienceType(source.notification_type))
            }
        };

        let mut derived = 0;
        for actor_id in source
            .actor_ids
            .iter()
            .filter(|actor_id| **actor_id != source.trigger_id)
        {
            self.merge_event(MergeRequest {
                receiver_id: actor_id.clone(),
                sender_id: source.trigger_id.clone(),
                target_id: source.target_id.clone(),
                target_type: source.target_type.clone(),
                notification_type: audience_type,
                created_at: source.created_at,
            });
            derived += 1;
        }

        debug!(
            "Derived {} {} notifications for target {}",
            derived,
            audience_type.name(),
            source.target_id
        );
        Ok(derived)
    }
}
