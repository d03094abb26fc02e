//! In-memory notification store.

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::{NotificationKey, NotificationRecord};
use crate::events::Id;

/// One record per [`NotificationKey`], iterated in key insertion order.
#[derive(Debug, Default, Clone)]
pub struct NotificationStore {
    records: IndexMap<NotificationKey, NotificationRecord>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &NotificationKey) -> Option<&NotificationRecord> {
        self.records.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.records.values()
    }

    pub fn records_for<'a>(
        &'a self,
        receiver_id: &'a Id,
    ) -> impl Iterator<Item = &'a NotificationRecord> + 'a {
        self.iter()
            .filter(move |record| &record.receiver_id == receiver_id)
    }

    pub(crate) fn entry(
        &mut self,
        key: NotificationKey,
    ) -> Entry<'_, NotificationKey, NotificationRecord> {
        self.records.entry(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::millis_to_datetime;
    use crate::notifications::{Aggregator, MergeRequest, NotificationType};

    fn merge(aggregator: &mut Aggregator, receiver: &str, target: &str, millis: i64) {
        aggregator.merge_event(MergeRequest {
            receiver_id: Id::from(receiver),
            sender_id: Id::from("9"),
            target_id: Id::from(target),
            target_type: "question".to_string(),
            notification_type: NotificationType::PostAnswer,
            created_at: millis_to_datetime(millis).unwrap(),
        });
    }

    #[test]
    fn test_iteration_follows_key_insertion_not_time() {
        let mut aggregator = Aggregator::new();
        merge(&mut aggregator, "1", "10", 1000);
        merge(&mut aggregator, "1", "20", 2000);
        merge(&mut aggregator, "1", "10", 3000);

        let store = aggregator.into_store();
        let targets: Vec<&str> = store.iter().map(|r| r.target_id.as_str()).collect();
        assert_eq!(targets, vec!["10", "20"]);
    }

    #[test]
    fn test_records_for_receiver() {
        let mut aggregator = Aggregator::new();
        merge(&mut aggregator, "1", "10", 1000);
        merge(&mut aggregator, "2", "10", 1000);
        merge(&mut aggregator, "1", "30", 1000);

        let store = aggregator.into_store();
        let receiver = Id::from("1");
        assert_eq!(store.records_for(&receiver).count(), 2);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert!(NotificationStore::new().is_empty());
    }
}
