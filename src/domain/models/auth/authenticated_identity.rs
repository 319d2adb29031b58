use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::domain::models::identity::Identity;
use crate::errors::AppError;

/// 자격 증명 토큰에서 복원된 사용자 신원
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 검증에 성공하면
/// request extensions 에 저장하고, 핸들러는 추출자로 받아 사용합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedIdentity(pub Identity);

impl AuthenticatedIdentity {
    pub fn identity(&self) -> &Identity {
        &self.0
    }

    pub fn into_inner(self) -> Identity {
        self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedIdentity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(AppError::InvalidTokenError)),
        }
    }
}

/// 선택적 인증 신원 추출자
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<AuthenticatedIdentity>);

impl FromRequest for OptionalIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req.extensions().get::<AuthenticatedIdentity>().cloned();
        ready(Ok(OptionalIdentity(identity)))
    }
}
