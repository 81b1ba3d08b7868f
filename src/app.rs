/*
 * Responsibility
 * - Config読み込み → 依存生成 (TokenVerifier / PolicyTable / repos) → Router 組み立て
 * - Middleware の適用 (HTTP / CORS。guard chain は routes 側で route ごとに掛ける)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::repos::Repos;
use crate::services::auth::build_token_verifier;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,pos_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr は起動方法によっては見えないので tracing にも出す
        tracing::error!(?info, "panic");

        // development: プロセスごと落として即座に気づけるようにする
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());
    tracing::debug!(?config, "configuration loaded");

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = middleware::http::apply(middleware::cors::apply(router(state), &config), &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// 起動時に一度だけ組み立てる。以降 verifier / policy は読み取りのみ
pub fn build_state(config: &Config) -> AppState {
    AppState::new(
        build_token_verifier(config),
        Arc::new(api::v1::policy::table()),
        Repos::default(),
    )
}

/// `/health` と guard 付きの `/api/v1` を持つ Router (横断 middleware は含まない)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::v1::handlers::health::health))
        .nest("/api/v1", api::v1::routes(&state))
        .with_state(state)
}
