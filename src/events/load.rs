//! Event file loading

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::Event;

/// Decodes a JSON array of events and orders it ascending by `created_at`.
///
/// The sort is stable: events sharing a timestamp keep their file order.
pub fn parse_events(content: &str) -> Result<Vec<Event>> {
    let mut events: Vec<Event> =
        serde_json::from_str(content).context("Failed to decode events")?;
    events.sort_by_key(|event| event.created_at);
    Ok(events)
}

pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file: {:?}", path))?;
    let events =
        parse_events(&content).with_context(|| format!("Failed to parse events file: {:?}", path))?;
    info!("Loaded {} events from {:?}", events.len(), path);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Id;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_events_sorts_by_created_at() {
        let events = parse_events(
            r#"[
                {"user_id":1,"sender_id":3,"target_id":10,"target_type":"q","notification_type_id":1,"created_at":3000},
                {"user_id":1,"sender_id":2,"target_id":10,"target_type":"q","notification_type_id":1,"created_at":1000},
                {"user_id":1,"sender_id":4,"target_id":10,"target_type":"q","notification_type_id":1,"created_at":2000}
            ]"#,
        )
        .unwrap();

        let senders: Vec<&str> = events.iter().map(|e| e.sender_id.as_str()).collect();
        assert_eq!(senders, vec!["2", "4", "3"]);
    }

    #[test]
    fn test_parse_events_keeps_file_order_for_ties() {
        let events = parse_events(
            r#"[
                {"user_id":1,"sender_id":5,"target_id":10,"notification_type_id":1,"created_at":1000},
                {"user_id":1,"sender_id":6,"target_id":10,"notification_type_id":1,"created_at":1000}
            ]"#,
        )
        .unwrap();

        assert_eq!(events[0].sender_id, Id::from("5"));
        assert_eq!(events[1].sender_id, Id::from("6"));
    }

    #[test]
    fn test_parse_events_rejects_non_array() {
        assert!(parse_events(r#"{"user_id":1}"#).is_err());
    }

    #[test]
    fn test_load_events_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"user_id":1,"sender_id":2,"target_id":10,"target_type":"q","notification_type_id":2,"created_at":1000}}]"#
        )
        .unwrap();

        let events = load_events(file.path()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].notification_type_id, 2);
    }

    #[test]
    fn test_load_events_missing_file() {
        let err = load_events(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read events file"));
    }
}
