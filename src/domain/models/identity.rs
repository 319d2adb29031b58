//! # Canonical Identity
//!
//! 모든 프로바이더 어댑터가 만들어내야 하는 공통 사용자 신원 모델입니다.
//! 프로바이더별 응답 형태(GitHub의 `login`/`avatar_url`, Discord의 `username`/아바타 해시 등)를
//! 하나의 형태로 정규화하여 하위 로직이 특정 프로바이더에 의존하지 않도록 합니다.
//!
//! ```text
//! GitHub  { login, avatar_url } + emails[primary] ─┐
//!                                                  ├─► Identity { name, email, profile_picture }
//! Discord { username, email, id + avatar }   ──────┘
//! ```
//!
//! 영속성 계층이 없으므로 식별자(ID)가 없는 값 객체이며, 로그인마다 새로 만들어지고
//! 토큰 발급 후에는 버려집니다. 이후에는 자격 증명 토큰이 유일한 영속 표현입니다.

use serde::{Deserialize, Serialize};

/// 정규화된 사용자 신원
///
/// JSON 으로는 `{"name", "email", "profilePicture"}` 형태로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// 프로바이더의 사용자명 (GitHub `login`, Discord `username`)
    pub name: String,

    /// 사용자 이메일
    ///
    /// Discord에서 `email` 스코프가 허용되지 않은 경우 빈 문자열입니다.
    pub email: String,

    /// 프로필 사진 URL
    pub profile_picture: String,
}

impl Identity {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        profile_picture: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            profile_picture: profile_picture.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_serializes_camel_case() {
        let identity = Identity::new(
            "octocat",
            "octocat@github.com",
            "https://avatars.githubusercontent.com/u/583231",
        );
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["name"], "octocat");
        assert_eq!(json["email"], "octocat@github.com");
        assert_eq!(
            json["profilePicture"],
            "https://avatars.githubusercontent.com/u/583231"
        );
        assert!(json.get("profile_picture").is_none());
    }
}
