/*
 * Responsibility
 * - v1 の公開ポイント (routes() / policy の re-export など)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod policy;
mod routes;

pub use routes::routes;
