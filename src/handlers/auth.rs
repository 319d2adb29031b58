//! Authentication HTTP Handlers
//!
//! 프로바이더 로그인과 자격 증명 토큰 검증 엔드포인트입니다.
//! 모든 핸들러는 `web::Data<AuthService>`를 통해 Facade 에 위임합니다.
//!
//! # Endpoints
//!
//! - `GET /auth/login/{provider}?code=` - GitHub/Discord authorization code 로 로그인
//! - `GET /auth/validate?token=` - 토큰 검증 후 신원 반환
//! - `GET /auth/me` - Bearer 토큰의 신원 반환 (AuthMiddleware 필요)
use actix_web::{get, web, HttpResponse};
use validator::Validate;
use crate::config::AuthProvider;
use crate::domain::dto::auth::{LoginQuery, ValidateTokenQuery};
use crate::domain::models::auth::AuthenticatedIdentity;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 프로바이더 로그인 핸들러
///
/// # Endpoint
/// `GET /auth/login/{provider}?code={code}`
///
/// # Responses
/// - `200 {"identity": {...}, "token": "..."}`
/// - `400 {"error": "..."}` - 지원하지 않는 프로바이더, code 누락, 프로바이더 거부
/// - `502 {"error": "..."}` - 프로바이더 연결 실패
#[get("/login/{provider}")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    path: web::Path<String>,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    let provider: AuthProvider = path.into_inner().parse()?;

    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth_service.login_via(provider, &query.code).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 검증 핸들러
///
/// # Endpoint
/// `GET /auth/validate?token={token}`
///
/// # Responses
/// - `200 {"name", "email", "profilePicture"}`
/// - `401 {"error": "Invalid token"}`
#[get("/validate")]
pub async fn validate(
    auth_service: web::Data<AuthService>,
    query: web::Query<ValidateTokenQuery>,
) -> Result<HttpResponse, AppError> {
    let identity = auth_service.validate_token(&query.token)?;

    Ok(HttpResponse::Ok().json(identity))
}

/// 현재 사용자 신원 조회
///
/// # Endpoint
/// `GET /auth/me` (Authorization: Bearer)
#[get("")]
pub async fn me(identity: AuthenticatedIdentity) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(identity.into_inner()))
}
