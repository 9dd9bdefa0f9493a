/*
 * Responsibility
 * - URL 構造を定義 (/ と /health のみ)
 * - 未定義パス (404) / 未定義メソッド (405) は axum のデフォルトのまま
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, root::hello};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
}
