/*
 * Responsibility
 * - customers の CRUD (in-memory)
 */
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
pub struct CustomerRepo {
    rows: Arc<RwLock<Vec<CustomerRow>>>,
}

impl CustomerRepo {
    /// 新しい順
    pub async fn list(&self) -> Vec<CustomerRow> {
        let rows = self.rows.read().await;
        rows.iter().rev().cloned().collect()
    }

    pub async fn create(
        &self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
        created_by: &str,
    ) -> CustomerRow {
        let row = CustomerRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
            created_by: created_by.to_string(),
            created_at: Utc::now(),
        };

        self.rows.write().await.push(row.clone());
        row
    }

    pub async fn get(&self, id: Uuid) -> Option<CustomerRow> {
        let rows = self.rows.read().await;
        rows.iter().find(|r| r.id == id).cloned()
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        rows.len() != before
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}
