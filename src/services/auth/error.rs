/*
 * Responsibility
 * - 認証/認可パイプラインの内部エラー分類
 *   - MalformedCredential: ヘッダ抽出段階の失敗 (verify 前)
 *   - InvalidCredential: 署名/期限/claims の検証失敗 (TokenVerifier)
 *   - InsufficientRole: 認証済みだがロールが要件に含まれない
 * - 呼び出し元へは区別せず 401 を返す (AppError::Unauthorized)。区別はログ用
 */
use thiserror::Error;

use crate::services::auth::{Role, RoleRequirement};

/// Errors returned by `TokenVerifier`.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("token expired (exp={exp}, now={now})")]
    Expired { exp: i64, now: i64 },
    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed credential: {0}")]
    MalformedCredential(&'static str),
    #[error("invalid credential: {0}")]
    InvalidCredential(#[from] VerifyError),
    #[error("insufficient role: {role} not in {required}")]
    InsufficientRole {
        role: Role,
        required: RoleRequirement,
    },
}

impl AuthError {
    /// ログ用の短い分類名
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MalformedCredential(_) => "malformed_credential",
            AuthError::InvalidCredential(_) => "invalid_credential",
            AuthError::InsufficientRole { .. } => "insufficient_role",
        }
    }
}
