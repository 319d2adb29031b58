//! # Data & Server Configuration
//!
//! 설정값 조회 계층([`ConfigSource`])과 서버 바인딩, Rate Limiting 설정을 정의합니다.
//!
//! ## 설정 키 규칙
//!
//! 설정 키는 `Section:Name` 형태의 계층형 이름을 사용합니다.
//! 동일한 값을 환경 변수와 JSON 시크릿 파일 두 곳에서 제공할 수 있으며,
//! 환경 변수가 항상 우선합니다.
//!
//! | 설정 키 | 환경 변수 | secrets.json 경로 |
//! |---------|-----------|-------------------|
//! | `Jwt:Key` | `JWT_KEY` | `{"Jwt": {"Key": ...}}` |
//! | `Github:ClientId` | `GITHUB_CLIENT_ID` | `{"Github": {"ClientId": ...}}` |
//! | `Discord:RedirectUri` | `DISCORD_REDIRECT_URI` | `{"Discord": {"RedirectUri": ...}}` |
//! | `Server:Port` | `SERVER_PORT` | `{"Server": {"Port": 8080}}` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::ConfigSource;
//!
//! let source = ConfigSource::from_process()?;
//! let issuer = source.require("Jwt:Issuer")?;
//! let port: u16 = source.parse_or("Server:Port", 8080);
//! ```

use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

use serde_json::Value;

use crate::errors::errors::{AppError, AppResult};

/// 시크릿 파일 경로를 지정하는 환경 변수
pub const SECRETS_FILE_ENV: &str = "SECRETS_FILE";

/// 시크릿 파일 기본 경로
pub const DEFAULT_SECRETS_FILE: &str = "secrets.json";

/// 계층형 설정 키 조회기
///
/// 프로세스 시작 시 한 번 구성되며, 이후에는 읽기 전용으로만 사용됩니다.
/// 환경 변수 스냅샷과 선택적인 JSON 시크릿 문서를 함께 보관합니다.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    env: HashMap<String, String>,
    file: Option<Value>,
}

impl ConfigSource {
    /// 주어진 환경 변수 맵과 시크릿 문서로 조회기를 생성합니다.
    pub fn new(env: HashMap<String, String>, file: Option<Value>) -> Self {
        Self { env, file }
    }

    /// 현재 프로세스의 환경 변수와 시크릿 파일로 조회기를 생성합니다.
    ///
    /// 시크릿 파일이 없으면 환경 변수만 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 시크릿 파일이 존재하지만 읽을 수 없거나 JSON 형식이 아님
    pub fn from_process() -> AppResult<Self> {
        let env: HashMap<String, String> = env::vars().collect();
        let path = env
            .get(SECRETS_FILE_ENV)
            .cloned()
            .unwrap_or_else(|| DEFAULT_SECRETS_FILE.to_string());

        let file = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let document = serde_json::from_str::<Value>(&contents).map_err(|e| {
                    AppError::ConfigError(format!("{} 파싱 실패: {}", path, e))
                })?;
                log::info!("시크릿 파일 로드 됨: {}", path);
                Some(document)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("시크릿 파일 없음 ({}), 환경 변수만 사용합니다", path);
                None
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!("{} 읽기 실패: {}", path, e)));
            }
        };

        Ok(Self::new(env, file))
    }

    /// 계층형 키를 환경 변수 이름으로 변환합니다.
    ///
    /// `Jwt:Key` → `JWT_KEY`, `Discord:RedirectUri` → `DISCORD_REDIRECT_URI`
    pub fn env_var_name(key: &str) -> String {
        key.split(':')
            .map(|segment| {
                let mut out = String::with_capacity(segment.len() + 4);
                let mut prev_lower = false;
                for c in segment.chars() {
                    if c.is_ascii_uppercase() && prev_lower {
                        out.push('_');
                    }
                    prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
                    out.push(c.to_ascii_uppercase());
                }
                out
            })
            .collect::<Vec<_>>()
            .join("_")
    }

    /// 설정값을 조회합니다. 빈 문자열은 값이 없는 것으로 취급합니다.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.env.get(&Self::env_var_name(key)) {
            if !value.trim().is_empty() {
                return Some(value.clone());
            }
        }

        let mut node = self.file.as_ref()?;
        for segment in key.split(':') {
            node = node.get(segment)?;
        }

        match node {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// 필수 설정값을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 환경 변수와 시크릿 파일 모두에 값이 없음
    pub fn require(&self, key: &str) -> AppResult<String> {
        self.get(key).ok_or_else(|| {
            AppError::ConfigError(format!(
                "{} must be set ({} or {})",
                key,
                Self::env_var_name(key),
                DEFAULT_SECRETS_FILE
            ))
        })
    }

    /// 선택 설정값을 조회하고, 없으면 기본값을 반환합니다.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// 설정값을 파싱합니다. 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
    pub fn parse_or<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        match self.get(key) {
            None => default,
            Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
                log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
                default
            }),
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_source(source: &ConfigSource) -> Self {
        Self {
            host: source.get_or("Server:Host", "127.0.0.1"),
            port: source.parse_or("Server:Port", 8080),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
///
/// * `RateLimit:PerSecond` - 초당 허용 요청 수 (기본값: 100)
/// * `RateLimit:BurstSize` - 버스트 허용량 (기본값: 200)
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_source(source: &ConfigSource) -> Self {
        Self {
            per_second: source.parse_or("RateLimit:PerSecond", 100),
            burst_size: source.parse_or("RateLimit:BurstSize", 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_var_name_conversion() {
        assert_eq!(ConfigSource::env_var_name("Jwt:Key"), "JWT_KEY");
        assert_eq!(ConfigSource::env_var_name("Github:ClientId"), "GITHUB_CLIENT_ID");
        assert_eq!(
            ConfigSource::env_var_name("Discord:RedirectUri"),
            "DISCORD_REDIRECT_URI"
        );
        assert_eq!(
            ConfigSource::env_var_name("RateLimit:PerSecond"),
            "RATE_LIMIT_PER_SECOND"
        );
    }

    #[test]
    fn test_env_overrides_secrets_file() {
        let source = ConfigSource::new(
            env_of(&[("JWT_ISSUER", "from-env")]),
            Some(json!({"Jwt": {"Issuer": "from-file", "Audience": "photon"}})),
        );

        assert_eq!(source.get("Jwt:Issuer").as_deref(), Some("from-env"));
        assert_eq!(source.get("Jwt:Audience").as_deref(), Some("photon"));
        assert_eq!(source.get("Jwt:Key"), None);
    }

    #[test]
    fn test_blank_env_value_falls_back_to_file() {
        let source = ConfigSource::new(
            env_of(&[("JWT_KEY", "   ")]),
            Some(json!({"Jwt": {"Key": "file-key"}})),
        );

        assert_eq!(source.get("Jwt:Key").as_deref(), Some("file-key"));
    }

    #[test]
    fn test_require_reports_missing_key() {
        let source = ConfigSource::default();

        match source.require("Discord:ClientSecret") {
            Err(AppError::ConfigError(msg)) => {
                assert!(msg.contains("Discord:ClientSecret"));
                assert!(msg.contains("DISCORD_CLIENT_SECRET"));
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_server_config_defaults_and_numbers_from_file() {
        let defaults = ServerConfig::from_source(&ConfigSource::default());
        assert_eq!(defaults.bind_address(), "127.0.0.1:8080");

        let source = ConfigSource::new(HashMap::new(), Some(json!({"Server": {"Port": 9090}})));
        assert_eq!(ServerConfig::from_source(&source).port, 9090);
    }

    #[test]
    fn test_rate_limit_invalid_value_uses_default() {
        let source = ConfigSource::new(
            env_of(&[("RATE_LIMIT_PER_SECOND", "fast"), ("RATE_LIMIT_BURST_SIZE", "40")]),
            None,
        );
        let config = RateLimitConfig::from_source(&source);

        assert_eq!(config.per_second, 100);
        assert_eq!(config.burst_size, 40);
    }
}
