/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - verifier: TokenVerifier, policy: PolicyTable, repos: in-memory repos
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - verifier / policy は起動後に書き換えない
 */
use std::sync::Arc;

use crate::repos::Repos;
use crate::services::auth::{PolicyTable, TokenVerifier};

#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub policy: Arc<PolicyTable>,
    pub repos: Repos,
}

impl AppState {
    pub fn new(verifier: Arc<TokenVerifier>, policy: Arc<PolicyTable>, repos: Repos) -> Self {
        Self {
            verifier,
            policy,
            repos,
        }
    }
}
