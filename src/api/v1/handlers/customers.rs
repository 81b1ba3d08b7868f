/*
 * Responsibility
 * - /customers 系 handler
 * - Json を extractor で受け、DTO validation → repo 呼び出し
 * - 作成者は Identity から記録する
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::customers::{CreateCustomerRequest, CustomerResponse},
        extractors::CurrentIdentity,
    },
    error::AppError,
    repos::customer_repo::CustomerRow,
    state::AppState,
};

fn row_to_response(row: CustomerRow) -> CustomerResponse {
    CustomerResponse {
        id: row.id,
        name: row.name,
        phone: row.phone,
        email: row.email,
        created_by: row.created_by,
        created_at: row.created_at,
    }
}

pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<CustomerResponse>> {
    let rows = state.repos.customers.list().await;
    Json(rows.into_iter().map(row_to_response).collect())
}

pub async fn create_customer(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_CUSTOMER", msg))?;

    let row = state
        .repos
        .customers
        .create(
            req.name.trim(),
            req.phone.as_deref(),
            req.email.as_deref(),
            &identity.subject_id,
        )
        .await;

    tracing::info!(customer_id = %row.id, created_by = %row.created_by, "customer created");

    Ok((StatusCode::CREATED, Json(row_to_response(row))))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    let row = state
        .repos
        .customers
        .get(customer_id)
        .await
        .ok_or(AppError::not_found("customer"))?;

    Ok(Json(row_to_response(row)))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(customer_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.repos.customers.delete(customer_id).await {
        return Err(AppError::not_found("customer"));
    }

    tracing::info!(%customer_id, deleted_by = %identity.subject_id, "customer deleted");

    Ok(StatusCode::NO_CONTENT)
}
