//! # GitHub OAuth App 인증 어댑터
//!
//! ## 처리 흐름
//!
//! ```text
//! code
//!  │ 1. POST {token_url}              client_id, client_secret, code (Accept: application/json)
//!  ▼
//! access_token ── error 필드 존재 ──▶ ProviderExchangeError("<error_description> <error_uri>")
//!  │ 2. GET {api}/user                Authorization: Bearer, User-Agent
//!  ▼
//! GitHubUser { login, avatar_url }
//!  │ 3. GET {api}/user/emails
//!  ▼
//! primary 이메일 ── 없음 ──▶ MissingPrimaryEmailError
//!  │
//!  ▼
//! Identity { name: login, email: primary, profile_picture: avatar_url }
//! ```
//!
//! GitHub 토큰 엔드포인트는 잘못된 code 에도 HTTP 200 을 돌려주므로
//! 상태 코드가 아닌 응답 필드로 실패를 판단합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::clients::{HttpClient, HttpRequest};
use crate::config::{AuthProvider, GitHubOAuthConfig};
use crate::domain::models::identity::Identity;
use crate::domain::models::oauth::github_oauth_model::{
    find_primary_email, GitHubEmail, GitHubTokenResponse, GitHubUser,
};
use crate::errors::{AppError, AppResult};
use crate::services::oauth::{parse_resource, send, IdentityProvider};

const GITHUB_JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// GitHub 로그인 어댑터
pub struct GitHubAuthService {
    config: GitHubOAuthConfig,
    http: Arc<dyn HttpClient>,
}

impl GitHubAuthService {
    pub fn new(config: GitHubOAuthConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// authorization code 를 액세스 토큰으로 교환
    async fn exchange_code_for_token(&self, code: &str) -> AppResult<String> {
        let request = HttpRequest::post_form(
            &self.config.token_url,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
            ],
        )
        .accept_json()
        .header("User-Agent", &self.config.user_agent);

        let response = send(self.http.as_ref(), AuthProvider::GitHub, request).await?;

        let token: GitHubTokenResponse = response.json().map_err(|e| {
            log::warn!("GitHub 토큰 응답 파싱 실패 (HTTP {}): {}", response.status, e);
            AppError::ProviderExchangeError(format!(
                "GitHub token exchange failed with status {}",
                response.status
            ))
        })?;

        match (&token.error, token.access_token.as_deref()) {
            (None, Some(access_token)) if !access_token.is_empty() => Ok(access_token.to_string()),
            _ => {
                let message = token.error_message();
                log::warn!("GitHub 토큰 교환 거부: {}", message);
                Err(AppError::ProviderExchangeError(message))
            }
        }
    }

    fn api_request(&self, path: &str, access_token: &str) -> HttpRequest {
        HttpRequest::get(format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path))
            .bearer_auth(access_token)
            .header("Accept", GITHUB_JSON_MEDIA_TYPE)
            .header("User-Agent", &self.config.user_agent)
    }

    async fn fetch_user(&self, access_token: &str) -> AppResult<GitHubUser> {
        let response = send(
            self.http.as_ref(),
            AuthProvider::GitHub,
            self.api_request("/user", access_token),
        )
        .await?;

        parse_resource(AuthProvider::GitHub, "user", &response)
    }

    async fn fetch_primary_email(&self, access_token: &str) -> AppResult<String> {
        let response = send(
            self.http.as_ref(),
            AuthProvider::GitHub,
            self.api_request("/user/emails", access_token),
        )
        .await?;

        let emails: Vec<GitHubEmail> = parse_resource(AuthProvider::GitHub, "emails", &response)?;

        find_primary_email(&emails)
            .map(|primary| primary.email.clone())
            .ok_or(AppError::MissingPrimaryEmailError)
    }
}

#[async_trait]
impl IdentityProvider for GitHubAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::GitHub
    }

    async fn exchange_and_fetch_identity(&self, code: &str) -> AppResult<Identity> {
        let access_token = self.exchange_code_for_token(code).await?;
        let user = self.fetch_user(&access_token).await?;
        let email = self.fetch_primary_email(&access_token).await?;

        log::info!("GitHub 사용자 인증 완료: {}", user.login);

        Ok(Identity::new(user.login, email, user.avatar_url))
    }
}
