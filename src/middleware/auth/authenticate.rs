//! Stage 1: `Authorization: Bearer <jwt>` を検証 → Identity を extensions に入れる
//!
//! - ヘッダ抽出の失敗は `MalformedCredential` (verify は呼ばない)
//! - 署名/期限/claims の失敗は `InvalidCredential`
//! - 成功時の副作用は「このリクエストの extensions に Identity を入れる」だけ

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};

use crate::api::v1::extractors::Identity;
use crate::error::AppError;
use crate::services::auth::{AuthError, TokenVerifier};
use crate::state::AppState;

const BEARER: &str = "bearer";

/// `Authorization` ヘッダから bearer token を取り出す。scheme は大文字小文字を区別しない
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MalformedCredential("missing authorization header"))?
        .to_str()
        .map_err(|_| AuthError::MalformedCredential("authorization header is not ascii"))?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedCredential("missing bearer scheme"))?;

    if !scheme.eq_ignore_ascii_case(BEARER) {
        return Err(AuthError::MalformedCredential("unsupported auth scheme"));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedCredential("empty bearer token"));
    }

    Ok(token)
}

/// 抽出 → 検証 → Identity を extensions に格納
///
/// 同じリクエストに対して何度呼んでも同じ Identity になり、slot を同値で上書きするだけ
pub fn authenticate<B>(verifier: &TokenVerifier, req: &mut Request<B>) -> Result<Identity, AuthError> {
    let token = extract_bearer(req.headers())?;
    let claims = verifier.verify(token)?;

    let identity = Identity::from(claims);
    req.extensions_mut().insert(identity.clone());

    Ok(identity)
}

pub(super) async fn authenticate_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    match authenticate(&state.verifier, &mut req) {
        Ok(identity) => {
            tracing::debug!(
                subject_id = %identity.subject_id,
                role = %identity.role,
                "authenticated"
            );
        }
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "authentication failed"
            );
            return Err(err.into());
        }
    }

    Ok(next.run(req).await)
}
