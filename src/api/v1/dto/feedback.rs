use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub rating: u8,
    pub message: String,
}

impl CreateFeedbackRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=5).contains(&self.rating) {
            return Err("rating must be between 1 and 5");
        }
        if self.message.trim().is_empty() {
            return Err("message is required");
        }
        if self.message.len() > 2000 {
            return Err("message must be <= 2000 chars");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub author_id: String,
    pub rating: u8,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
