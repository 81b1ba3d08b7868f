use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub id: Uuid,
    pub requested_by: String,
    pub customer_count: usize,
    pub feedback_count: usize,
    pub created_at: DateTime<Utc>,
}
