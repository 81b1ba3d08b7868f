use serde::{Deserialize, Serialize};

use crate::services::auth::Role;

/// Access token (JWT) claims.
///
/// - `sub` は主体の識別子（顧客/スタッフ ID）。空文字は検証で弾く
/// - `role` は `Role` の閉じた集合のみ。未知の値は decode 時点で失敗する
/// - `iat` / `exp` は unix seconds。`iat` は任意 (無ければ 0)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}
