//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! OAuth 로그인 파이프라인과 자격 증명 토큰 검증을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | code 누락, 지원하지 않는 프로바이더 |
//! | `ProviderExchangeError` | 400 Bad Request | 프로바이더가 code/클라이언트를 거부 |
//! | `MissingPrimaryEmailError` | 400 Bad Request | GitHub 기본 이메일 없음 |
//! | `InvalidProviderResponseError` | 400 Bad Request | 정규화할 수 없는 프로필 응답 |
//! | `InvalidTokenError` | 401 Unauthorized | 서명/발급자/대상/만료 검증 실패 |
//! | `ExternalServiceError` | 502 Bad Gateway | 프로바이더 네트워크 오류 |
//! | `ConfigError` | 500 Internal Server Error | 필수 설정 누락 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! fn primary_email(emails: &[GitHubEmail]) -> Result<String, AppError> {
//!     emails.iter()
//!         .find(|e| e.primary)
//!         .map(|e| e.email.clone())
//!         .ok_or(AppError::MissingPrimaryEmailError)
//! }
//! ```

use thiserror::Error;

/// 토큰 검증 실패 시 클라이언트에게 노출되는 유일한 메시지
///
/// 어떤 검증 단계에서 실패했는지는 절대 응답에 포함하지 않습니다.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// 애플리케이션 전역 에러 타입
///
/// 로그인/검증 요청 처리 중 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 프로바이더가 authorization code 또는 클라이언트 자격 증명을 거부함 (400 Bad Request)
    ///
    /// 진단을 위해 프로바이더가 돌려준 에러 설명을 그대로 전달합니다.
    #[error("{0}")]
    ProviderExchangeError(String),

    /// GitHub 계정에 primary 로 표시된 이메일이 없음 (400 Bad Request)
    #[error("No primary email address is associated with this account")]
    MissingPrimaryEmailError,

    /// 프로바이더 응답이 예상한 형태가 아님 (400 Bad Request)
    #[error("{0}")]
    InvalidProviderResponseError(String),

    /// 자격 증명 토큰 검증 실패 (401 Unauthorized)
    #[error("Invalid token")]
    InvalidTokenError,

    /// 외부 서비스 통신 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 누락/형식 오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그에 남길 에러 분류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation",
            AppError::ProviderExchangeError(_) => "provider_exchange",
            AppError::MissingPrimaryEmailError => "missing_primary_email",
            AppError::InvalidProviderResponseError(_) => "invalid_provider_response",
            AppError::InvalidTokenError => "invalid_token",
            AppError::ExternalServiceError(_) => "external_service",
            AppError::ConfigError(_) => "config",
            AppError::InternalError(_) => "internal",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::ProviderExchangeError(_)
            | AppError::MissingPrimaryEmailError
            | AppError::InvalidProviderResponseError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTokenError => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"error": "..."}` JSON 응답으로 변환합니다.
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = match self {
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_provider_errors_are_bad_request() {
        let errors = [
            AppError::ValidationError("code is required".to_string()),
            AppError::ProviderExchangeError("bad_verification_code".to_string()),
            AppError::MissingPrimaryEmailError,
            AppError::InvalidProviderResponseError("Invalid token".to_string()),
        ];

        for error in errors {
            assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_invalid_token_response() {
        let error = AppError::InvalidTokenError;
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), INVALID_TOKEN_MESSAGE);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("connection refused".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_provider_exchange_error_surfaces_provider_text() {
        let error = AppError::ProviderExchangeError(
            "The code passed is incorrect or expired. https://docs.github.com".to_string(),
        );
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json["error"],
            "The code passed is incorrect or expired. https://docs.github.com"
        );
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::ConfigError("Jwt:Key must be set".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
