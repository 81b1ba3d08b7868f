//! Request authorization pipeline.
//!
//! v1 の Router 全体に [1] を、各 route に [2] を掛ける:
//!
//! ```text
//! request → [1] authenticate (Router 全体) → [2] authorize (route ごと) → handler
//!             │ MalformedCredential / InvalidCredential
//!             │                  │ InsufficientRole
//!             └──────────────────┴──→ 401 (handler は実行されない)
//! ```
//!
//! - [1] は `Router::layer` なので、未定義 path (404) / 未定義 method (405) も含めて
//!   全リクエストで最初に走る。未認証の呼び出しに route の有無を見せない
//! - [2] は `route_layer` なので、[1] の内側でしか走らない (順序は構造で保証される)
//! - どの段の失敗も即座に打ち切り、判定はリクエストごとに 1 回だけ
//! - 副作用は [1] の Identity 格納のみ。[2] は読み取りと比較だけ
//!
//! 例：
//! ```ignore
//! let v1 = Router::new()
//!     .route("/customers", guarded(get(list_customers), &state, CUSTOMERS_LIST))
//!     .fallback(not_found);
//! let v1 = middleware::auth::apply(v1, state.clone());
//! ```

pub mod authenticate;
pub mod authorize;

use axum::{Router, middleware, routing::MethodRouter};

use crate::services::auth::HandlerRef;
use crate::state::AppState;

pub use authenticate::{authenticate, extract_bearer};
pub use authorize::authorize;

use authenticate::authenticate_middleware;
use authorize::{RouteGuard, authorize_middleware};

/// stage [1]: router 配下の全リクエスト (fallback を含む) に認証を掛ける
///
/// fallback も包むため、`router` には fallback を設定してから渡すこと
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, authenticate_middleware))
}

/// stage [2]: `method_router` に handler のロール要件チェックを掛ける
pub fn guarded(
    method_router: MethodRouter<AppState>,
    state: &AppState,
    handler: HandlerRef,
) -> MethodRouter<AppState> {
    let guard = RouteGuard {
        state: state.clone(),
        handler,
    };

    method_router.route_layer(middleware::from_fn_with_state(guard, authorize_middleware))
}
