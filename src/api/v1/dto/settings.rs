use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub store_name: Option<String>,
    pub currency: Option<String>,
    pub tax_rate_percent: Option<f64>,
}

impl UpdateSettingsRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.store_name
            && name.trim().is_empty()
        {
            return Err("store_name cannot be empty");
        }
        // ISO 4217 (3 letters)
        if let Some(currency) = &self.currency
            && (currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err("currency must be a 3-letter code");
        }
        if let Some(rate) = self.tax_rate_percent
            && !(0.0..=100.0).contains(&rate)
        {
            return Err("tax_rate_percent must be between 0 and 100");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub store_name: String,
    pub currency: String,
    pub tax_rate_percent: f64,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
