//! 요청 인증 모델
//!
//! 인증 미들웨어가 사용하는 모드와, 핸들러에서 사용하는 신원 추출자를 정의합니다.

pub mod authenticated_identity;
pub mod authentication_request;

pub use authenticated_identity::*;
pub use authentication_request::*;
