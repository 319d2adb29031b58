use serde::{Deserialize, Serialize};
use crate::domain::models::identity::Identity;

/// 로그인 성공 응답 DTO
///
/// ```json
/// {
///   "identity": { "name": "octocat", "email": "octocat@github.com", "profilePicture": "https://..." },
///   "token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub identity: Identity,
    pub token: String,
}

impl LoginResponse {
    pub fn new(identity: Identity, token: String) -> Self {
        Self { identity, token }
    }
}
