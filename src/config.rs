/*
 * Responsibility
 * - 環境変数や設定の読み込み (APP_ENV, タイムアウト, body 上限)
 * - 設定値のバリデーション (不正なら起動失敗)
 * - bind アドレスは 0.0.0.0:5001 固定 (環境変数では変えない)
 */
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Config {
    pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
        std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        5001,
    );
    const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparsable keys are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let timeout_secs = parse_positive::<u64>(&lookup, "REQUEST_TIMEOUT_SECONDS")?
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECONDS);

        let body_limit_bytes = parse_positive::<usize>(&lookup, "REQUEST_BODY_LIMIT_BYTES")?
            .unwrap_or(Self::DEFAULT_BODY_LIMIT_BYTES);

        Ok(Self {
            addr: Self::DEFAULT_ADDR,
            app_env,
            request_timeout: Duration::from_secs(timeout_secs),
            body_limit_bytes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: Self::DEFAULT_ADDR,
            app_env: AppEnv::Development,
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
            body_limit_bytes: Self::DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) if v > T::default() => Ok(Some(v)),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_matches_default() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        let default = Config::default();

        assert_eq!(config.addr, default.addr);
        assert_eq!(config.app_env, default.app_env);
        assert_eq!(config.request_timeout, default.request_timeout);
        assert_eq!(config.body_limit_bytes, default.body_limit_bytes);
    }

    #[test]
    fn binds_all_interfaces_on_5001() {
        let config = Config::default();
        assert_eq!(config.addr.to_string(), "0.0.0.0:5001");
    }

    #[test]
    fn port_is_not_read_from_environment() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.addr.port(), 5001);
    }

    #[test]
    fn app_env_accepts_prod_aliases() {
        for raw in ["production", "PROD", "Production"] {
            let config = Config::from_lookup(lookup_from(&[("APP_ENV", raw)])).unwrap();
            assert!(config.app_env.is_production(), "{raw} should be production");
        }

        let config = Config::from_lookup(lookup_from(&[("APP_ENV", "staging")])).unwrap();
        assert_eq!(config.app_env, AppEnv::Development);
    }

    #[test]
    fn overrides_timeout_and_body_limit() {
        let config = Config::from_lookup(lookup_from(&[
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("REQUEST_BODY_LIMIT_BYTES", "2048"),
        ]))
        .unwrap();

        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.body_limit_bytes, 2048);
    }

    #[test]
    fn rejects_unparsable_or_zero_values() {
        let err = Config::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECONDS", "abc")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));

        let err = Config::from_lookup(lookup_from(&[("REQUEST_BODY_LIMIT_BYTES", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"));
        assert_eq!(
            err.to_string(),
            "invalid configuration: REQUEST_BODY_LIMIT_BYTES"
        );
    }
}
