/*
 * Responsibility
 * - /backups 系 handler (admin 専用)
 * - 実行記録のみ。テーブル描画などは扱わない
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{dto::backups::BackupResponse, extractors::CurrentIdentity},
    repos::backup_repo::BackupRow,
    state::AppState,
};

fn row_to_response(row: BackupRow) -> BackupResponse {
    BackupResponse {
        id: row.id,
        requested_by: row.requested_by,
        customer_count: row.customer_count,
        feedback_count: row.feedback_count,
        created_at: row.created_at,
    }
}

pub async fn list_backups(State(state): State<AppState>) -> Json<Vec<BackupResponse>> {
    let rows = state.repos.backups.list().await;
    Json(rows.into_iter().map(row_to_response).collect())
}

pub async fn create_backup(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> (StatusCode, Json<BackupResponse>) {
    let customer_count = state.repos.customers.count().await;
    let feedback_count = state.repos.feedback.count().await;

    let row = state
        .repos
        .backups
        .create(&identity.subject_id, customer_count, feedback_count)
        .await;

    tracing::info!(backup_id = %row.id, requested_by = %row.requested_by, "backup recorded");

    (StatusCode::CREATED, Json(row_to_response(row)))
}
