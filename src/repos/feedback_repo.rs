/*
 * Responsibility
 * - feedback の追加/一覧 (in-memory)
 */
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub author_id: String,
    pub rating: u8,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackRepo {
    rows: Arc<RwLock<Vec<FeedbackRow>>>,
}

impl FeedbackRepo {
    pub async fn list(&self) -> Vec<FeedbackRow> {
        let rows = self.rows.read().await;
        rows.iter().rev().cloned().collect()
    }

    pub async fn create(&self, author_id: &str, rating: u8, message: &str) -> FeedbackRow {
        let row = FeedbackRow {
            id: Uuid::new_v4(),
            author_id: author_id.to_string(),
            rating,
            message: message.to_string(),
            created_at: Utc::now(),
        };

        self.rows.write().await.push(row.clone());
        row
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}
