/*
 * Responsibility
 * - GET /me: guard が解決した Identity をそのまま返す
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::CurrentIdentity};

pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<MeResponse> {
    Json(MeResponse {
        subject_id: identity.subject_id,
        role: identity.role,
    })
}
