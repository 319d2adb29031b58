//! # 인증 Facade
//!
//! HTTP 계층이 사용하는 단일 진입점입니다. 로그인 요청을 프로바이더 어댑터로 위임하고,
//! 결과 [`Identity`]로 자격 증명 토큰을 발급합니다.
//!
//! ```text
//! login_via(provider, code)
//!   └─▶ IdentityProvider::exchange_and_fetch_identity(code) ─▶ Identity
//!         └─▶ TokenService::issue(identity) ─▶ LoginResponse { identity, token }
//!
//! validate_token(token)
//!   └─▶ TokenService::validate(token) ─▶ Identity
//! ```
//!
//! 서비스는 `main`에서 한 번 만들어 `web::Data`로 공유합니다.

use std::collections::HashMap;
use std::sync::Arc;
use crate::config::AuthProvider;
use crate::domain::dto::auth::LoginResponse;
use crate::domain::models::identity::Identity;
use crate::errors::{AppError, AppResult};
use crate::services::auth::token_service::TokenService;
use crate::services::oauth::IdentityProvider;

pub struct AuthService {
    token_service: TokenService,
    providers: HashMap<AuthProvider, Arc<dyn IdentityProvider>>,
}

impl AuthService {
    pub fn new(token_service: TokenService, providers: Vec<Arc<dyn IdentityProvider>>) -> Self {
        let mut service = Self {
            token_service,
            providers: HashMap::new(),
        };
        for provider in providers {
            service.register(provider);
        }
        service
    }

    /// 어댑터를 등록합니다. 같은 프로바이더가 이미 있으면 교체합니다.
    pub fn register(&mut self, provider: Arc<dyn IdentityProvider>) {
        log::info!("인증 프로바이더 등록: {}", provider.provider());
        self.providers.insert(provider.provider(), provider);
    }

    /// 프로바이더 로그인
    pub async fn login_via(&self, provider: AuthProvider, code: &str) -> AppResult<LoginResponse> {
        let adapter = self.providers.get(&provider).ok_or_else(|| {
            AppError::ValidationError(format!("Unsupported auth provider: {}", provider))
        })?;

        let identity = adapter.exchange_and_fetch_identity(code).await.map_err(|e| {
            log::warn!("{} 로그인 실패 [{}]: {}", provider, e.kind(), e);
            e
        })?;

        let token = self.token_service.issue(&identity)?;

        log::info!("{} 로그인 성공: {}", provider, identity.name);

        Ok(LoginResponse::new(identity, token))
    }

    /// 자격 증명 토큰 검증
    pub fn validate_token(&self, token: &str) -> AppResult<Identity> {
        self.token_service.validate(token)
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[actix_web::test]
    async fn test_login_issues_token_for_identity() {
        let (service, _) = auth_service();

        let response = service.login_via(AuthProvider::GitHub, "good").await.unwrap();

        assert_eq!(response.identity, octocat());
        assert_eq!(service.validate_token(&response.token).unwrap(), octocat());
    }

    #[actix_web::test]
    async fn test_login_propagates_provider_error() {
        let (service, _) = auth_service();

        let err = service.login_via(AuthProvider::GitHub, "used").await.unwrap_err();
        assert_eq!(err, AppError::ProviderExchangeError("Invalid code".to_string()));
    }

    #[actix_web::test]
    async fn test_login_with_unregistered_provider() {
        let (service, _) = auth_service();

        let err = service.login_via(AuthProvider::Discord, "good").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_register_adds_provider() {
        let (mut service, _) = auth_service();
        let wumpus = Identity::new("wumpus", "", "https://cdn.discordapp.com/embed/avatars/0.png");
        service.register(Arc::new(FakeProvider {
            provider: AuthProvider::Discord,
            identity: wumpus.clone(),
        }));

        let response = service.login_via(AuthProvider::Discord, "good").await.unwrap();
        assert_eq!(response.identity, wumpus);
    }

    #[test]
    fn test_validate_token_rejects_garbage() {
        let (service, _) = auth_service();

        assert_eq!(service.validate_token("garbage").unwrap_err(), AppError::InvalidTokenError);
    }
}
