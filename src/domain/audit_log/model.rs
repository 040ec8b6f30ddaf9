//! Audit log entry

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i32,
    pub user_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(user_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            user_name: user_name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
