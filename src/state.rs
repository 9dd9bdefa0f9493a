/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - 現状ハンドラは全て定数を返すので中身は空
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
