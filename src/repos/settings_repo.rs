/*
 * Responsibility
 * - 店舗設定 (単一レコード, in-memory)
 */
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct SettingsRow {
    pub store_name: String,
    pub currency: String,
    pub tax_rate_percent: f64,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SettingsRow {
    fn default() -> Self {
        Self {
            store_name: "My Store".to_string(),
            currency: "USD".to_string(),
            tax_rate_percent: 0.0,
            updated_by: None,
            updated_at: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SettingsRepo {
    row: Arc<RwLock<SettingsRow>>,
}

impl SettingsRepo {
    pub async fn get(&self) -> SettingsRow {
        self.row.read().await.clone()
    }

    pub async fn update(
        &self,
        store_name: Option<&str>,
        currency: Option<&str>,
        tax_rate_percent: Option<f64>,
        updated_by: &str,
    ) -> SettingsRow {
        let mut row = self.row.write().await;

        if let Some(v) = store_name {
            row.store_name = v.to_string();
        }
        if let Some(v) = currency {
            row.currency = v.to_ascii_uppercase();
        }
        if let Some(v) = tax_rate_percent {
            row.tax_rate_percent = v;
        }
        row.updated_by = Some(updated_by.to_string());
        row.updated_at = Some(Utc::now());

        row.clone()
    }
}
