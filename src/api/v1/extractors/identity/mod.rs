/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - 認証済みリクエストの主体（Identity）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - Identity
 * - CurrentIdentity
 */

mod core;
mod types;

pub use core::CurrentIdentity;
pub use types::Identity;
