//! # Domain Models Module
//!
//! 인증 흐름에서 오가는 값 객체들을 정의합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── identity.rs     ← 프로바이더 공통 사용자 신원 (Identity)
//! ├── token/          ← 자격 증명 토큰 클레임
//! ├── auth/           ← 인증 모드, 신원 추출자
//! └── oauth/          ← GitHub / Discord 응답 모델
//! ```
//!
//! ## 흐름
//!
//! ```text
//! GitHubUser / DiscordUser ──▶ Identity ──▶ CredentialClaims ──▶ JWT
//!                                  ▲                               │
//!                                  └────────── into_identity ◀─────┘
//! ```
//!
//! 모든 모델은 불변 값 객체로 다루며, 영속화하지 않습니다.

pub mod identity;
pub mod token;
pub mod auth;
pub mod oauth;

pub use identity::*;
pub use token::*;
pub use auth::*;
