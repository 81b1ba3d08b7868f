use serde::Serialize;

use crate::services::auth::Role;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub subject_id: String,
    pub role: Role,
}
