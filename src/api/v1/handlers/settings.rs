/*
 * Responsibility
 * - /settings の取得/更新
 * - 更新者は Identity から記録する
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::settings::{SettingsResponse, UpdateSettingsRequest},
        extractors::CurrentIdentity,
    },
    error::AppError,
    repos::settings_repo::SettingsRow,
    state::AppState,
};

fn row_to_response(row: SettingsRow) -> SettingsResponse {
    SettingsResponse {
        store_name: row.store_name,
        currency: row.currency,
        tax_rate_percent: row.tax_rate_percent,
        updated_by: row.updated_by,
        updated_at: row.updated_at,
    }
}

pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(row_to_response(state.repos.settings.get().await))
}

pub async fn update_settings(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_SETTINGS", msg))?;

    let row = state
        .repos
        .settings
        .update(
            req.store_name.as_deref().map(str::trim),
            req.currency.as_deref(),
            req.tax_rate_percent,
            &identity.subject_id,
        )
        .await;

    Ok(Json(row_to_response(row)))
}
