//! # OAuth 프로바이더 어댑터
//!
//! 프로바이더마다 authorization code 를 액세스 토큰으로 교환하고, 프로필을 조회하여
//! 공통 [`Identity`]로 변환합니다. 모든 어댑터는 [`IdentityProvider`] trait 을 구현하며
//! [`AuthService`](crate::services::auth::AuthService)에 등록되어 사용됩니다.
//!
//! ## 에러 분류
//!
//! | 상황 | 에러 | HTTP |
//! |------|------|------|
//! | 프로바이더가 code/클라이언트를 거부 | `ProviderExchangeError` | 400 |
//! | GitHub primary 이메일 없음 | `MissingPrimaryEmailError` | 400 |
//! | 프로필/이메일 응답이 2xx 아님, 파싱 불가, 필수 필드 누락 | `InvalidProviderResponseError` | 400 |
//! | 연결 실패, 타임아웃 | `ExternalServiceError` | 502 |
//!
//! 재시도는 하지 않습니다. authorization code 는 일회용이므로 같은 code 로 다시 교환할 수 없습니다.

pub mod github_auth_service;
pub mod discord_auth_service;

pub use github_auth_service::GitHubAuthService;
pub use discord_auth_service::DiscordAuthService;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::config::AuthProvider;
use crate::domain::models::identity::Identity;
use crate::errors::{AppError, AppResult};

/// authorization code 를 [`Identity`]로 바꾸는 프로바이더 어댑터
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// 이 어댑터가 담당하는 프로바이더
    fn provider(&self) -> AuthProvider;

    /// code 교환과 프로필 조회를 한 번에 수행합니다.
    async fn exchange_and_fetch_identity(&self, code: &str) -> AppResult<Identity>;
}

/// 요청을 보내고 전송 실패를 `ExternalServiceError`로 변환합니다.
pub(crate) async fn send(
    http: &dyn HttpClient,
    provider: AuthProvider,
    request: HttpRequest,
) -> AppResult<HttpResponse> {
    http.execute(request).await.map_err(|e| {
        log::error!("{} 요청 실패: {}", provider, e);
        AppError::ExternalServiceError(format!("{} 요청 실패: {}", provider, e))
    })
}

/// 프로필/이메일 응답을 파싱합니다. 2xx 가 아니거나 본문을 해석할 수 없으면 `InvalidProviderResponseError`.
pub(crate) fn parse_resource<T: DeserializeOwned>(
    provider: AuthProvider,
    resource: &str,
    response: &HttpResponse,
) -> AppResult<T> {
    if !response.is_success() {
        log::warn!("{} {} 조회 실패: HTTP {}", provider, resource, response.status);
        return Err(AppError::InvalidProviderResponseError(format!(
            "{} {} request failed with status {}",
            provider, resource, response.status
        )));
    }

    response.json::<T>().map_err(|e| {
        log::warn!("{} {} 응답 파싱 실패: {}", provider, resource, e);
        AppError::InvalidProviderResponseError(format!(
            "Unexpected {} {} response",
            provider, resource
        ))
    })
}
