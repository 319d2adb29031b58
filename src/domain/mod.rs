//! # Domain Layer Module
//!
//! 인증 서비스의 도메인 계층입니다. 저장소가 없는 무상태 서비스이므로
//! 엔티티 없이 값 객체와 DTO만으로 구성됩니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs         - 데이터 전송 객체 (Query / Response)
//! └── Models       - Identity, 토큰 클레임, 프로바이더 응답 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (clients: 외부 HTTP 호출)
//! ```
//!
//! ## 모듈 구성
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`models`] | `Identity`, `CredentialClaims`, `AuthenticatedIdentity`, OAuth 응답 모델 |
//! | [`dto`] | `LoginQuery`, `ValidateTokenQuery`, `LoginResponse` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::{Identity, LoginResponse};
//!
//! let identity = Identity::new("octocat", "octocat@github.com", "https://avatars.githubusercontent.com/u/1");
//! let token = token_service.issue(&identity)?;
//! let response = LoginResponse::new(identity, token);
//! ```
//!
//! ## 설계 원칙
//!
//! - **불변성**: 모든 값 객체는 생성 후 변경하지 않음
//! - **프로바이더 중립**: 서비스 계층 밖으로는 `Identity`만 노출
//! - **명시적 변환**: 프로바이더 모델에서 `Identity`로의 변환은 어댑터가 담당

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
