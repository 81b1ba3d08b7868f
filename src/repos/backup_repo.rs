/*
 * Responsibility
 * - backup の実行記録 (in-memory)
 * - 実際のスナップショット取得は扱わない。記録した時点の件数だけ残す
 */
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BackupRow {
    pub id: Uuid,
    pub requested_by: String,
    pub customer_count: usize,
    pub feedback_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct BackupRepo {
    rows: Arc<RwLock<Vec<BackupRow>>>,
}

impl BackupRepo {
    pub async fn list(&self) -> Vec<BackupRow> {
        let rows = self.rows.read().await;
        rows.iter().rev().cloned().collect()
    }

    pub async fn create(
        &self,
        requested_by: &str,
        customer_count: usize,
        feedback_count: usize,
    ) -> BackupRow {
        let row = BackupRow {
            id: Uuid::new_v4(),
            requested_by: requested_by.to_string(),
            customer_count,
            feedback_count,
            created_at: Utc::now(),
        };

        self.rows.write().await.push(row.clone());
        row
    }
}
