/*
 * Responsibility
 * - middleware の公開インターフェース
 * - Router レベルで apply する (handler の中では使わない)
 */
pub mod http;
pub mod security_headers;
