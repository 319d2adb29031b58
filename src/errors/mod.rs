//! 에러 타입 모듈
//!
//! [`errors::AppError`]를 중심으로 로그인/검증 파이프라인의 모든 실패를 표현합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::{AppError, AppResult};
