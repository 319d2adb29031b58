//! 자격 증명 토큰(JWT) 클레임 구조체
//!
//! RFC 7519 등록 클레임(`iss`, `aud`, `nbf`, `iat`, `exp`)과
//! OpenID Connect 표준 클레임 이름(`name`, `email`, `picture`)으로 신원 정보를 담습니다.
//!
//! 신원 정보는 클레임 **이름**으로 읽고 씁니다. 클레임 순서가 바뀌어도
//! 복원된 [`Identity`]가 달라지지 않습니다.
use serde::{Deserialize, Serialize};
use crate::domain::models::identity::Identity;

/// 자격 증명 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `name`: 사용자명
/// - `email`: 사용자 이메일
/// - `picture`: 프로필 사진 URL
/// - `iss`: 발급자 (`Jwt:Issuer`)
/// - `aud`: 대상 (`Jwt:Audience`)
/// - `nbf`: 유효 시작 시간 (Unix timestamp, `iat`와 동일)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp, 발급 시간 + 30일)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialClaims {
    pub name: String,
    pub email: String,
    pub picture: String,
    pub iss: String,
    pub aud: String,
    pub nbf: i64,
    pub iat: i64,
    pub exp: i64,
}

impl CredentialClaims {
    /// 신원 정보와 발급 메타데이터로 클레임을 구성합니다.
    pub fn new(identity: &Identity, issuer: &str, audience: &str, issued_at: i64, expires_at: i64) -> Self {
        Self {
            name: identity.name.clone(),
            email: identity.email.clone(),
            picture: identity.profile_picture.clone(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            nbf: issued_at,
            iat: issued_at,
            exp: expires_at,
        }
    }

    /// 클레임에서 신원 정보를 복원합니다.
    pub fn into_identity(self) -> Identity {
        Identity {
            name: self.name,
            email: self.email,
            profile_picture: self.picture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_read_by_claim_name_regardless_of_order() {
        // 페이로드의 필드 순서를 뒤섞어도 같은 신원이 복원되어야 함
        let payload = serde_json::json!({
            "picture": "https://cdn.discordapp.com/avatars/42/abc.png",
            "exp": 1_700_000_000i64 + 30 * 86_400,
            "email": "wumpus@discord.com",
            "aud": "photon",
            "iat": 1_700_000_000i64,
            "name": "wumpus",
            "nbf": 1_700_000_000i64,
            "iss": "photon-auth",
        });

        let claims: CredentialClaims = serde_json::from_value(payload).unwrap();
        let identity = claims.into_identity();

        assert_eq!(identity.name, "wumpus");
        assert_eq!(identity.email, "wumpus@discord.com");
        assert_eq!(identity.profile_picture, "https://cdn.discordapp.com/avatars/42/abc.png");
    }
}
