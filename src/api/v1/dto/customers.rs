/*
 * Responsibility
 * - Customers の request/response DTO
 * - validate() で形式チェック (phone の整形は扱わない)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.name.len() > 128 {
            return Err("name must be <= 128 chars");
        }
        if let Some(phone) = &self.phone
            && phone.len() > 32
        {
            return Err("phone must be <= 32 chars");
        }
        if let Some(email) = &self.email
            && !email.contains('@')
        {
            return Err("email is invalid");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
