//! Photon 인증 서비스
//!
//! GitHub, Discord OAuth 로그인을 처리하고 서명된 자격 증명 토큰(JWT)을 발급하는
//! 무상태 인증 서비스입니다. 사용자 정보는 저장하지 않으며, 토큰 자체가 신원을 담습니다.
//!
//! # Features
//!
//! - **프로바이더 로그인**: authorization code 교환 후 프로필을 공통 `Identity`로 변환
//! - **자격 증명 토큰**: HS256 서명, 30일 유효, 이름/이메일/프로필 사진 클레임
//! - **토큰 검증**: 서명, 발급자, 대상, 만료 확인 후 `Identity` 복원
//! - **인증 미들웨어**: Bearer 토큰으로 보호되는 라우트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/login/{provider}, /auth/validate, /auth/me
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthService   │ ← 로그인 Facade
//! └─────────────────┘
//!      │        │
//!      ▼        ▼
//! ┌─────────┐ ┌──────────────┐
//! │ Provider│ │ TokenService │ ← JWT 발급/검증
//! │ Adapters│ └──────────────┘
//! └─────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   HttpClient    │ ← GitHub / Discord API
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use photon_auth::services::auth::{AuthService, SystemClock, TokenService};
//! use photon_auth::config::AuthProvider;
//!
//! let token_service = TokenService::new(jwt_config, Arc::new(SystemClock));
//! let auth_service = AuthService::new(token_service, vec![github, discord]);
//!
//! let login = auth_service.login_via(AuthProvider::GitHub, &code).await?;
//! let identity = auth_service.validate_token(&login.token)?;
//! ```

pub mod config;
pub mod domain;
pub mod clients;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
