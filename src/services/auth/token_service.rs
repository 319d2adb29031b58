//! # 자격 증명 토큰 서비스
//!
//! [`Identity`]를 HS256 서명 JWT 로 발급하고, 검증하여 다시 [`Identity`]로 복원합니다.
//!
//! ## 토큰 구성
//!
//! | 클레임 | 값 |
//! |--------|-----|
//! | `name`, `email`, `picture` | Identity 필드 (이름으로 매핑) |
//! | `iss` / `aud` | `Jwt:Issuer` / `Jwt:Audience` |
//! | `iat`, `nbf` | 발급 시각 |
//! | `exp` | 발급 시각 + 30일 |
//!
//! ## 검증 규칙
//!
//! - 알고리즘은 HS256 만 허용 (`alg: none` 등 다른 헤더는 거부)
//! - 서명, 발급자, 대상이 모두 설정과 일치해야 함
//! - 만료/유효 시작 시각은 주입된 [`Clock`] 기준, 허용 오차 없음
//! - 모든 실패는 [`AppError::InvalidTokenError`] 하나로 보고
//!
//! ```rust,ignore
//! let token = token_service.issue(&identity)?;
//! let restored = token_service.validate(&token)?;
//! assert_eq!(restored, identity);
//! ```

use std::sync::Arc;
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::identity::Identity;
use crate::domain::models::token::CredentialClaims;
use crate::errors::{AppError, AppResult};
use crate::services::auth::clock::Clock;

/// 자격 증명 토큰 유효 기간 (일)
pub const CREDENTIAL_TOKEN_LIFETIME_DAYS: i64 = 30;

pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
            clock,
        }
    }

    /// 신원 정보로 서명된 토큰을 발급합니다.
    pub fn issue(&self, identity: &Identity) -> AppResult<String> {
        let now = self.clock.now();
        let expires_at = now + Duration::days(CREDENTIAL_TOKEN_LIFETIME_DAYS);

        let claims = CredentialClaims::new(
            identity,
            &self.config.issuer,
            &self.config.audience,
            now.timestamp(),
            expires_at.timestamp(),
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰을 검증하고 신원 정보를 복원합니다.
    pub fn validate(&self, token: &str) -> AppResult<Identity> {
        let claims = decode::<CredentialClaims>(token, &self.decoding_key, &self.validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                AppError::InvalidTokenError
            })?;

        let now = self.clock.now().timestamp();
        if now >= claims.exp {
            log::debug!("토큰 만료: exp {}, now {}", claims.exp, now);
            return Err(AppError::InvalidTokenError);
        }
        if now < claims.nbf {
            log::debug!("아직 유효하지 않은 토큰: nbf {}, now {}", claims.nbf, now);
            return Err(AppError::InvalidTokenError);
        }

        Ok(claims.into_identity())
    }

    /// `Authorization: Bearer <token>` 헤더 값에서 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        let (scheme, token) = auth_header
            .trim()
            .split_once(' ')
            .ok_or(AppError::InvalidTokenError)?;

        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
            return Err(AppError::InvalidTokenError);
        }

        Ok(token)
    }

    // 만료/유효 시작 시각은 주입된 시계로 직접 확인
    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud"]);
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.set_audience(&[self.config.audience.as_str()]);
        validation
    }
}
