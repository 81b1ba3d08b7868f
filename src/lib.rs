/*
 * Responsibility
 * - crate のモジュール構成を公開する (bin / token-gen / tests から参照)
 * - ロジックは置かない
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
