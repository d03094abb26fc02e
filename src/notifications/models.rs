//! Notification data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Id;

/// Notification type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    PostAnswer = 1,
    PostComment = 2,
    UpvoteAnswer = 3,
    AnswerAudience = 4,
    CommentAudience = 5,
}

/// What audience expansion does for a source notification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceRule {
    /// Co-actors receive a notification of the given type.
    Derive(NotificationType),
    /// The type never has an audience.
    Never,
    /// No derived type exists; expanding is an error.
    Unsupported,
}

impl NotificationType {
    pub const ALL: [NotificationType; 5] = [
        NotificationType::PostAnswer,
        NotificationType::PostComment,
        NotificationType::UpvoteAnswer,
        NotificationType::AnswerAudience,
        NotificationType::CommentAudience,
    ];

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            NotificationType::PostAnswer => "post_answer",
            NotificationType::PostComment => "post_comment",
            NotificationType::UpvoteAnswer => "upvote_answer",
            NotificationType::AnswerAudience => "answer_audience",
            NotificationType::CommentAudience => "comment_audience",
        }
    }

    pub fn audience_rule(self) -> AudienceRule {
        match self {
            NotificationType::PostAnswer => AudienceRule::Derive(NotificationType::AnswerAudience),
            NotificationType::PostComment => {
                AudienceRule::Derive(NotificationType::CommentAudience)
            }
            NotificationType::UpvoteAnswer => AudienceRule::Never,
            NotificationType::AnswerAudience | NotificationType::CommentAudience => {
                AudienceRule::Unsupported
            }
        }
    }
}

/// Identity of one deduplicated notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationKey {
    pub receiver_id: Id,
    pub target_id: Id,
    pub notification_type: NotificationType,
}

impl NotificationKey {
    pub fn new(receiver_id: Id, target_id: Id, notification_type: NotificationType) -> Self {
        Self {
            receiver_id,
            target_id,
            notification_type,
        }
    }
}

/// The merged aggregate for one [`NotificationKey`].
///
/// Records are only handed out by shared reference; every mutation goes through
/// the aggregator's merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationRecord {
    pub receiver_id: Id,
    pub target_id: Id,
    pub target_type: String,
    pub notification_type: NotificationType,
    /// Sender of the most recently merged event.
    pub trigger_id: Id,
    /// Distinct senders in first-occurrence order.
    pub actor_ids: Vec<Id>,
    /// Timestamp of the most recently merged event.
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    pub(crate) fn absorb(&mut self, sender_id: Id, created_at: DateTime<Utc>) {
        if !self.actor_ids.contains(&sender_id) {
            self.actor_ids.push(sender_id.clone());
        }
        self.trigger_id = sender_id;
        self.created_at = created_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_ids_round_trip() {
        for notification_type in NotificationType::ALL {
            assert_eq!(
                NotificationType::from_id(notification_type.id()),
                Some(notification_type)
            );
        }
        assert_eq!(NotificationType::PostAnswer.id(), 1);
        assert_eq!(NotificationType::CommentAudience.id(), 5);
    }

    #[test]
    fn test_unknown_type_ids() {
        assert_eq!(NotificationType::from_id(0), None);
        assert_eq!(NotificationType::from_id(6), None);
        assert_eq!(NotificationType::from_id(-1), None);
        assert_eq!(NotificationType::from_id(4294967297), None);
    }

    #[test]
    fn test_notification_type_serialization() {
        let serialized = serde_json::to_string(&NotificationType::UpvoteAnswer).unwrap();
        assert_eq!(serialized, "\"upvote_answer\"");
        assert_eq!(NotificationType::UpvoteAnswer.name(), "upvote_answer");
    }

    #[test]
    fn test_audience_rules() {
        assert_eq!(
            NotificationType::PostAnswer.audience_rule(),
            AudienceRule::Derive(NotificationType::AnswerAudience)
        );
        assert_eq!(
            NotificationType::PostComment.audience_rule(),
            AudienceRule::Derive(NotificationType::CommentAudience)
        );
        assert_eq!(
            NotificationType::UpvoteAnswer.audience_rule(),
            AudienceRule::Never
        );
        assert_eq!(
            NotificationType::AnswerAudience.audience_rule(),
            AudienceRule::Unsupported
        );
        assert_eq!(
            NotificationType::CommentAudience.audience_rule(),
            AudienceRule::Unsupported
        );
    }

    #[test]
    fn test_absorb_keeps_first_occurrence_order() {
        let t0 = DateTime::from_timestamp(0, 0).unwrap();
        let t1 = DateTime::from_timestamp(1, 0).unwrap();
        let mut record = NotificationRecord {
            receiver_id: Id::from("1"),
            target_id: Id::from("10"),
            target_type: "question".to_string(),
            notification_type: NotificationType::PostAnswer,
            trigger_id: Id::from("2"),
            actor_ids: vec![Id::from("2"), Id::from("3")],
            created_at: t0,
        };

        record.absorb(Id::from("2"), t1);

        assert_eq!(record.actor_ids, vec![Id::from("2"), Id::from("3")]);
        assert_eq!(record.trigger_id, Id::from("2"));
        assert_eq!(record.created_at, t1);
    }
}
