//! Stage 2: route handler のロール要件を解決し、Identity のロールと比較する
//!
//! Stage 1 (authenticate) が Identity を入れた後にしか呼ばれない。
//! Identity が無い場合も拒否する (policy を未認証の呼び出しに対して評価しない)

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::api::v1::extractors::Identity;
use crate::error::AppError;
use crate::services::auth::{AuthError, HandlerRef, PolicyTable, policy};
use crate::state::AppState;

/// route ごとの guard state (AppState + 対象 handler)
#[derive(Clone)]
pub(super) struct RouteGuard {
    pub(super) state: AppState,
    pub(super) handler: HandlerRef,
}

/// 認証済み Identity に対して handler の要件を評価する
pub fn authorize(
    policy_table: &PolicyTable,
    handler: &HandlerRef,
    identity: Option<&Identity>,
) -> Result<(), AuthError> {
    let identity =
        identity.ok_or(AuthError::MalformedCredential("no authenticated identity"))?;

    let requirement = policy_table.resolve(handler);
    policy::evaluate(identity.role, &requirement)
}

pub(super) async fn authorize_middleware(
    State(guard): State<RouteGuard>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = req.extensions().get::<Identity>();

    if let Err(err) = authorize(&guard.state.policy, &guard.handler, identity) {
        tracing::warn!(
            kind = err.kind(),
            error = %err,
            handler = %guard.handler,
            "authorization denied"
        );
        return Err(err.into());
    }

    tracing::debug!(handler = %guard.handler, "authorization allowed");

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::Role;

    const DELETE: HandlerRef = HandlerRef::new("customers", "delete");
    const LIST: HandlerRef = HandlerRef::new("customers", "list");
    const ME: HandlerRef = HandlerRef::new("me", "show");

    fn table() -> PolicyTable {
        PolicyTable::builder()
            .group("customers", &[Role::Admin, Role::Cashier])
            .handler(DELETE, &[Role::Admin])
            .build()
    }

    fn identity(role: Role) -> Identity {
        Identity {
            subject_id: "subject".to_string(),
            role,
        }
    }

    #[test]
    fn cashier_is_denied_admin_only_handler() {
        let err = authorize(&table(), &DELETE, Some(&identity(Role::Cashier))).unwrap_err();
        assert!(matches!(err, AuthError::InsufficientRole { role: Role::Cashier, .. }));
    }

    #[test]
    fn admin_is_allowed_admin_or_cashier_group() {
        assert!(authorize(&table(), &LIST, Some(&identity(Role::Admin))).is_ok());
    }

    #[test]
    fn unrestricted_handler_allows_any_role() {
        for role in Role::ALL {
            assert!(authorize(&table(), &ME, Some(&identity(role))).is_ok());
        }
    }

    #[test]
    fn missing_identity_is_denied_even_when_unrestricted() {
        assert!(matches!(
            authorize(&table(), &ME, None),
            Err(AuthError::MalformedCredential(_))
        ));
    }
}
