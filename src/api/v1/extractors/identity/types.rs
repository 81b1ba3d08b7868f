/*
 * Responsibility
 * - Handler から見える「認証済み主体」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 検証済み Claims からしか作れない (部分的に埋まった Identity は存在しない)
 * - リクエスト単位で所有され、リクエスト終了とともに破棄される
 */
use serde::Serialize;

use crate::services::auth::{Claims, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub subject_id: String,
    pub role: Role,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            subject_id: claims.sub,
            role: claims.role,
        }
    }
}
