//! 인증 요청 DTO
//!
//! 로그인과 토큰 검증 엔드포인트의 쿼리 파라미터를 정의합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 쿼리 (`?code=...`)
///
/// 파라미터가 없으면 빈 문자열로 받아 검증 단계에서 거부합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginQuery {
    /// 프로바이더 리다이렉트로 전달된 일회용 authorization code
    #[serde(default)]
    #[validate(length(min = 1, message = "authorization code가 필요합니다"))]
    pub code: String,
}

/// 토큰 검증 요청 쿼리 (`?token=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateTokenQuery {
    /// 검증할 자격 증명 토큰. 누락 시 빈 토큰으로 취급
    #[serde(default)]
    pub token: String,
}
