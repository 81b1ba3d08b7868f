/*
 * Responsibility
 * - /feedback 系 handler
 * - 投稿者は Identity の subject_id
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::feedback::{CreateFeedbackRequest, FeedbackResponse},
        extractors::CurrentIdentity,
    },
    error::AppError,
    repos::feedback_repo::FeedbackRow,
    state::AppState,
};

fn row_to_response(row: FeedbackRow) -> FeedbackResponse {
    FeedbackResponse {
        id: row.id,
        author_id: row.author_id,
        rating: row.rating,
        message: row.message,
        created_at: row.created_at,
    }
}

pub async fn list_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackResponse>> {
    let rows = state.repos.feedback.list().await;
    Json(rows.into_iter().map(row_to_response).collect())
}

pub async fn create_feedback(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_FEEDBACK", msg))?;

    let row = state
        .repos
        .feedback
        .create(&identity.subject_id, req.rating, req.message.trim())
        .await;

    Ok((StatusCode::CREATED, Json(row_to_response(row))))
}
