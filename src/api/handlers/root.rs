/*
 * Responsibility
 * - GET / (挨拶文を text/plain で返す)
 */
pub const GREETING: &str = "Hello, Docker!";

pub async fn hello() -> &'static str {
    GREETING
}
