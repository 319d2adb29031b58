//! # Discord OAuth2 인증 어댑터
//!
//! ## 처리 흐름
//!
//! ```text
//! code
//!  │ 1. POST {api}/oauth2/token       grant_type=authorization_code, code, redirect_uri
//!  │                                  Authorization: Basic base64(client_id:client_secret)
//!  ▼
//! access_token ── 없음 ──▶ ProviderExchangeError("Invalid code")
//!  │ 2. GET {api}/users/@me           Authorization: Bearer
//!  ▼
//! DiscordUser ── username 없음 ──▶ InvalidProviderResponseError("Invalid token")
//!  │
//!  ▼
//! Identity { name: username, email (없으면 ""), profile_picture: CDN URL }
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use crate::clients::{HttpClient, HttpRequest};
use crate::config::{AuthProvider, DiscordOAuthConfig};
use crate::domain::models::identity::Identity;
use crate::domain::models::oauth::discord_oauth_model::{DiscordTokenResponse, DiscordUser};
use crate::errors::{AppError, AppResult};
use crate::services::oauth::{parse_resource, send, IdentityProvider};

/// 토큰 교환 실패 시 사용자에게 보여줄 메시지
const INVALID_CODE_MESSAGE: &str = "Invalid code";

/// 프로필에 username 이 없을 때의 메시지
const INVALID_PROFILE_MESSAGE: &str = "Invalid token";

/// Discord 로그인 어댑터
pub struct DiscordAuthService {
    config: DiscordOAuthConfig,
    http: Arc<dyn HttpClient>,
}

impl DiscordAuthService {
    pub fn new(config: DiscordOAuthConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    async fn exchange_code_for_token(&self, code: &str) -> AppResult<String> {
        let request = HttpRequest::post_form(
            self.endpoint("/oauth2/token"),
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ],
        )
        .basic_auth(&self.config.client_id, &self.config.client_secret)
        .accept_json();

        let response = send(self.http.as_ref(), AuthProvider::Discord, request).await?;

        // 거부 응답(400 invalid_grant 등)도 본문을 읽어 access_token 유무로 판단
        let token: DiscordTokenResponse = response.json().unwrap_or_default();

        match token.access_token {
            Some(access_token) if !access_token.is_empty() => Ok(access_token),
            _ => {
                log::warn!(
                    "Discord 토큰 교환 거부 (HTTP {}): {}",
                    response.status,
                    token.error_description.or(token.error).unwrap_or_default()
                );
                Err(AppError::ProviderExchangeError(INVALID_CODE_MESSAGE.to_string()))
            }
        }
    }

    async fn fetch_user(&self, access_token: &str) -> AppResult<DiscordUser> {
        let request = HttpRequest::get(self.endpoint("/users/@me"))
            .bearer_auth(access_token)
            .accept_json();

        let response = send(self.http.as_ref(), AuthProvider::Discord, request).await?;

        parse_resource(AuthProvider::Discord, "user", &response)
    }
}

#[async_trait]
impl IdentityProvider for DiscordAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Discord
    }

    async fn exchange_and_fetch_identity(&self, code: &str) -> AppResult<Identity> {
        let access_token = self.exchange_code_for_token(code).await?;
        let user = self.fetch_user(&access_token).await?;

        let profile_picture = user.profile_picture_url();
        let username = match user.username {
            Some(username) if !username.is_empty() => username,
            _ => {
                log::warn!("Discord 프로필에 username 없음: id {}", user.id);
                return Err(AppError::InvalidProviderResponseError(
                    INVALID_PROFILE_MESSAGE.to_string(),
                ));
            }
        };

        log::info!("Discord 사용자 인증 완료: {}", username);

        Ok(Identity::new(
            username,
            user.email.unwrap_or_default(),
            profile_picture,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_client::stub::StubHttpClient;
    use crate::clients::{HttpClientError, HttpMethod};

    const TOKEN_URL: &str = "https://discord.test/api/v10/oauth2/token";
    const ME_URL: &str = "https://discord.test/api/v10/users/@me";

    fn service(stub: Arc<StubHttpClient>) -> DiscordAuthService {
        let config = DiscordOAuthConfig {
            client_id: "dc-id".to_string(),
            client_secret: "dc-secret".to_string(),
            redirect_uri: "http://localhost:3000/callback".to_string(),
            api_base_url: "https://discord.test/api/v10/".to_string(),
        };
        DiscordAuthService::new(config, stub)
    }

    fn token_ok() -> &'static str {
        r#"{"access_token":"dc_abc","token_type":"Bearer","expires_in":604800,"refresh_token":"r","scope":"identify email"}"#
    }

    #[actix_web::test]
    async fn test_identity_from_profile() {
        let stub = Arc::new(
            StubHttpClient::new()
                .respond(TOKEN_URL, 200, token_ok())
                .respond(ME_URL, 200, r#"{"id":"42","username":"wumpus","avatar":"abc","email":"wumpus@discord.com"}"#),
        );

        let identity = service(stub.clone()).exchange_and_fetch_identity("good").await.unwrap();

        assert_eq!(
            identity,
            Identity::new(
                "wumpus",
                "wumpus@discord.com",
                "https://cdn.discordapp.com/avatars/42/abc.png"
            )
        );

        let requests = stub.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].body.as_deref(),
            Some("grant_type=authorization_code&code=good&redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback")
        );
        // base64("dc-id:dc-secret")
        assert_eq!(
            requests[0].header_value("Authorization"),
            Some("Basic ZGMtaWQ6ZGMtc2VjcmV0")
        );
        assert_eq!(requests[1].header_value("Authorization"), Some("Bearer dc_abc"));
    }

    #[actix_web::test]
    async fn test_missing_access_token_stops_before_profile() {
        let stub = Arc::new(
            StubHttpClient::new()
                .respond(TOKEN_URL, 400, r#"{"error":"invalid_grant","error_description":"Invalid \"code\" in request."}"#)
                .respond(ME_URL, 200, r#"{"id":"42","username":"wumpus"}"#),
        );

        let err = service(stub.clone()).exchange_and_fetch_identity("used").await.unwrap_err();

        assert_eq!(err, AppError::ProviderExchangeError("Invalid code".to_string()));
        assert_eq!(stub.requested_urls(), vec![TOKEN_URL.to_string()]);
    }

    #[actix_web::test]
    async fn test_missing_username_is_invalid_response() {
        let stub = Arc::new(
            StubHttpClient::new()
                .respond(TOKEN_URL, 200, token_ok())
                .respond(ME_URL, 200, r#"{"id":"42","avatar":"abc"}"#),
        );

        let err = service(stub).exchange_and_fetch_identity("good").await.unwrap_err();
        assert_eq!(
            err,
            AppError::InvalidProviderResponseError("Invalid token".to_string())
        );
    }

    #[actix_web::test]
    async fn test_missing_email_and_avatar_use_defaults() {
        let stub = Arc::new(
            StubHttpClient::new()
                .respond(TOKEN_URL, 200, token_ok())
                .respond(ME_URL, 200, r#"{"id":"80351110224678912","username":"nelly","avatar":null}"#),
        );

        let identity = service(stub).exchange_and_fetch_identity("good").await.unwrap();

        assert_eq!(identity.email, "");
        assert!(identity
            .profile_picture
            .starts_with("https://cdn.discordapp.com/embed/avatars/"));
    }

    #[actix_web::test]
    async fn test_profile_rejected_is_invalid_response() {
        let stub = Arc::new(
            StubHttpClient::new()
                .respond(TOKEN_URL, 200, token_ok())
                .respond(ME_URL, 401, r#"{"message":"401: Unauthorized","code":0}"#),
        );

        let err = service(stub).exchange_and_fetch_identity("good").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidProviderResponseError(_)));
    }

    #[actix_web::test]
    async fn test_transport_failure_is_external_service_error() {
        let stub = Arc::new(
            StubHttpClient::new()
                .respond(TOKEN_URL, 200, token_ok())
                .fail(ME_URL, HttpClientError::Transport("timed out".to_string())),
        );

        let err = service(stub).exchange_and_fetch_identity("good").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
