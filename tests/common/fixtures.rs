//! Event fixtures

/// Two answers to the same question, from users 2 and 3, addressed to user 1.
pub const TWO_ANSWERS: &str = r#"[
    {"user_id": 1, "sender_id": 3, "target_id": 10, "target_type": "question", "notification_type_id": 1, "created_at": 1700000060000},
    {"user_id": 1, "sender_id": 2, "target_id": 10, "target_type": "question", "notification_type_id": 1, "created_at": 1700000000000}
]"#;

/// A mix of every notification type plus invalid and irrelevant events for user 1.
pub const MIXED_EVENTS: &str = r#"[
    {"user_id": 1, "sender_id": 2, "target_id": 20, "target_type": "answer", "notification_type_id": 3, "created_at": 1700000000000},
    {"user_id": 1, "sender_id": 1, "target_id": 20, "target_type": "answer", "notification_type_id": 3, "created_at": 1700000001000},
    {"user_id": 7, "sender_id": 2, "target_id": 20, "target_type": "answer", "notification_type_id": 3, "created_at": 1700000002000},
    {"user_id": 1, "sender_id": 3, "target_id": 20, "target_type": "answer", "notification_type_id": 3, "created_at": 1700000003000},
    {"user_id": 1, "sender_id": 4, "target_id": 20, "target_type": "answer", "notification_type_id": 3, "created_at": 1700000004000},
    {"user_id": 1, "sender_id": 5, "target_id": 30, "target_type": "question", "notification_type_id": 2, "created_at": 1700000005000},
    {"user_id": 1, "sender_id": 6, "target_id": 30, "target_type": "question", "notification_type_id": 8, "created_at": 1700000006000}
]"#;
