//! # Service Layer
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`oauth`] | 프로바이더 어댑터 (`GitHubAuthService`, `DiscordAuthService`) |
//! | [`auth`] | `TokenService`, `AuthService` Facade, `Clock` |
//!
//! 모든 서비스는 생성자로 설정과 의존성을 주입받습니다.

pub mod oauth;
pub mod auth;
