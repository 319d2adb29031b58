//! # Authentication Configuration Module
//!
//! 자격 증명 토큰(JWT) 서명 설정과 OAuth 프로바이더(GitHub, Discord) 클라이언트 설정을 관리합니다.
//! 모든 값은 프로세스 시작 시 [`ConfigSource`]에서 한 번 읽어 불변 값으로 만들고,
//! 이를 필요로 하는 서비스에 생성자로 주입합니다.
//!
//! ## 필수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_KEY="your-super-secret-256-bit-key"
//! export JWT_ISSUER="photon-auth"
//! export JWT_AUDIENCE="photon"
//! ```
//!
//! ### GitHub OAuth 설정
//! ```bash
//! export GITHUB_CLIENT_ID="Iv1.0123456789abcdef"
//! export GITHUB_CLIENT_SECRET="your-github-client-secret"
//! ```
//!
//! ### Discord OAuth 설정
//! ```bash
//! export DISCORD_CLIENT_ID="123456789012345678"
//! export DISCORD_CLIENT_SECRET="your-discord-client-secret"
//! export DISCORD_REDIRECT_URI="https://yourdomain.com/auth/callback/discord"
//! ```
//!
//! 같은 값을 `secrets.json`에 중첩 객체로 둘 수도 있습니다.
//!
//! ```json
//! {
//!   "Jwt": { "Key": "...", "Issuer": "photon-auth", "Audience": "photon" },
//!   "Github": { "ClientId": "...", "ClientSecret": "..." },
//!   "Discord": { "ClientId": "...", "ClientSecret": "...", "RedirectUri": "..." }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::config::data_config::ConfigSource;
use crate::errors::errors::{AppError, AppResult};

/// 자격 증명 토큰 서명/검증 설정
///
/// 서명 키는 Token Service만 보유합니다. 프로바이더 어댑터에는 절대 전달하지 않습니다.
///
/// ## 보안 요구사항
///
/// - 최소 256비트 (32바이트) 길이의 키
/// - 암호학적으로 안전한 랜덤 생성
/// - 환경별로 다른 키 사용
///
/// ```bash
/// openssl rand -base64 32
/// ```
#[derive(Clone, PartialEq)]
pub struct JwtConfig {
    pub key: String,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// `Jwt:Key`, `Jwt:Issuer`, `Jwt:Audience`를 읽어 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필수 키 누락
    pub fn from_source(source: &ConfigSource) -> AppResult<Self> {
        let config = Self {
            key: source.require("Jwt:Key")?,
            issuer: source.require("Jwt:Issuer")?,
            audience: source.require("Jwt:Audience")?,
        };

        if config.key.len() < 32 {
            log::warn!("Jwt:Key 길이가 32바이트 미만입니다 (not secure for production!)");
        }

        Ok(config)
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

/// GitHub OAuth App 설정
///
/// GitHub Developer Settings 에서 생성한 OAuth App의 클라이언트 정보입니다.
/// GitHub REST API는 `User-Agent` 헤더가 없는 요청을 거부하므로 함께 관리합니다.
#[derive(Clone, PartialEq)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    /// 토큰 교환 엔드포인트 (기본값: `https://github.com/login/oauth/access_token`)
    pub token_url: String,
    /// REST API 베이스 URL (기본값: `https://api.github.com`)
    pub api_base_url: String,
}

impl GitHubOAuthConfig {
    pub const DEFAULT_TOKEN_URL: &'static str = "https://github.com/login/oauth/access_token";
    pub const DEFAULT_API_BASE_URL: &'static str = "https://api.github.com";

    pub fn from_source(source: &ConfigSource) -> AppResult<Self> {
        Ok(Self {
            client_id: source.require("Github:ClientId")?,
            client_secret: source.require("Github:ClientSecret")?,
            user_agent: source.get_or("Github:UserAgent", "photon-auth"),
            token_url: source.get_or("Github:TokenUrl", Self::DEFAULT_TOKEN_URL),
            api_base_url: source.get_or("Github:ApiBaseUrl", Self::DEFAULT_API_BASE_URL),
        })
    }
}

impl fmt::Debug for GitHubOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Discord OAuth2 애플리케이션 설정
///
/// Discord 토큰 교환은 authorization code 발급 시 사용한 `redirect_uri`와
/// 정확히 같은 값을 다시 요구합니다.
#[derive(Clone, PartialEq)]
pub struct DiscordOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// API 베이스 URL (기본값: `https://discord.com/api/v10`)
    pub api_base_url: String,
}

impl DiscordOAuthConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "https://discord.com/api/v10";

    pub fn from_source(source: &ConfigSource) -> AppResult<Self> {
        Ok(Self {
            client_id: source.require("Discord:ClientId")?,
            client_secret: source.require("Discord:ClientSecret")?,
            redirect_uri: source.require("Discord:RedirectUri")?,
            api_base_url: source.get_or("Discord:ApiBaseUrl", Self::DEFAULT_API_BASE_URL),
        })
    }
}

impl fmt::Debug for DiscordOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// 지원하는 ID 프로바이더를 나타내는 열거형
///
/// Auth Facade가 어떤 어댑터로 로그인을 위임할지 결정하는 판별자입니다.
/// 새로운 프로바이더 추가 시 이 열거형에 변형을 추가하고 해당 어댑터를 등록하면 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// GitHub OAuth App
    GitHub,
    /// Discord OAuth2
    Discord,
}

impl AuthProvider {
    /// 해당 프로바이더의 소문자 문자열 표현
    ///
    /// ```rust,ignore
    /// assert_eq!(AuthProvider::GitHub.as_str(), "github");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::GitHub => "github",
            AuthProvider::Discord => "discord",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = AppError;

    /// 경로 파라미터 등 문자열로 전달된 프로바이더 이름을 변환합니다 (대소문자 무관).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" => Ok(AuthProvider::GitHub),
            "discord" => Ok(AuthProvider::Discord),
            _ => Err(AppError::ValidationError(format!(
                "Unsupported auth provider: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
