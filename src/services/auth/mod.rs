//! 인증 서비스: 토큰 발급/검증과 로그인 Facade

pub mod clock;
pub mod token_service;
pub mod auth_service;

pub use clock::*;
pub use token_service::*;
pub use auth_service::*;
