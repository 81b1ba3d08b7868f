/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - Router 全体に authenticate、route ごとに authorize を掛ける
 * - fallback (未定義 path) も authenticate の内側に置く
 * - handler 識別子は policy.rs の宣言と対応させる
 */
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::v1::handlers::{
    backups::{create_backup, list_backups},
    customers::{create_customer, delete_customer, get_customer, list_customers},
    feedback::{create_feedback, list_feedback},
    me::me,
    settings::{get_settings, update_settings},
};
use crate::api::v1::policy::*;
use crate::error::AppError;
use crate::middleware::auth::{self, guarded};
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::not_found("route")
}

pub fn routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/me", guarded(get(me), state, ME_SHOW))
        .route(
            "/customers",
            guarded(get(list_customers), state, CUSTOMERS_LIST).merge(guarded(
                post(create_customer),
                state,
                CUSTOMERS_CREATE,
            )),
        )
        .route(
            "/customers/{customer_id}",
            guarded(get(get_customer), state, CUSTOMERS_SHOW).merge(guarded(
                delete(delete_customer),
                state,
                CUSTOMERS_DELETE,
            )),
        )
        .route(
            "/feedback",
            guarded(get(list_feedback), state, FEEDBACK_LIST).merge(guarded(
                post(create_feedback),
                state,
                FEEDBACK_CREATE,
            )),
        )
        .route(
            "/backups",
            guarded(get(list_backups), state, BACKUPS_LIST).merge(guarded(
                post(create_backup),
                state,
                BACKUPS_CREATE,
            )),
        )
        .route(
            "/settings",
            guarded(get(get_settings), state, SETTINGS_SHOW).merge(guarded(
                put(update_settings),
                state,
                SETTINGS_UPDATE,
            )),
        )
        .fallback(not_found);

    auth::apply(router, state.clone())
}
