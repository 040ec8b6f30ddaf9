//! Audit log DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::LogEntry;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    pub id: i32,
    pub user_name: String,
    #[schema(example = "Created Reservation 7")]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<LogEntry> for LogResponse {
    fn from(e: LogEntry) -> Self {
        Self {
            id: e.id,
            user_name: e.user_name,
            description: e.description,
            created_at: e.created_at,
        }
    }
}
