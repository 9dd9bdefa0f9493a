/*
 * Responsibility
 * - HTTP ルートの公開インターフェース (routes() の re-export)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
