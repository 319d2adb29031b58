//! # Discord OAuth2 응답 모델
//!
//! Discord OAuth2 토큰 교환(`POST /oauth2/token`)과
//! 현재 사용자 조회(`GET /users/@me`) 응답 모델입니다.

use serde::Deserialize;

/// Discord CDN 베이스 URL
pub const DISCORD_CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Discord 토큰 교환 응답
///
/// 정상 응답은 `{access_token, token_type, expires_in, refresh_token, scope}` 입니다.
/// 잘못된 code 에 대해서는 `{"error": "invalid_grant", ...}` 가 오므로 모든 필드를 선택적으로 받습니다.
#[derive(Debug, Default, Deserialize)]
pub struct DiscordTokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Discord 사용자 (`GET /users/@me`)
#[derive(Debug, Deserialize)]
pub struct DiscordUser {
    /// 사용자 snowflake ID
    pub id: String,

    pub username: Option<String>,

    /// 아바타 해시 (기본 아바타 사용자는 `null`)
    pub avatar: Option<String>,

    /// `email` 스코프가 허용된 경우에만 포함
    pub email: Option<String>,
}

impl DiscordUser {
    /// 프로필 사진 CDN URL 을 만듭니다.
    ///
    /// - 아바타가 있으면 `https://cdn.discordapp.com/avatars/{id}/{avatar}.png`
    /// - 없으면 Discord 기본 아바타 `https://cdn.discordapp.com/embed/avatars/{(id >> 22) % 6}.png`
    pub fn profile_picture_url(&self) -> String {
        match self.avatar.as_deref() {
            Some(hash) if !hash.is_empty() => {
                format!("{}/avatars/{}/{}.png", DISCORD_CDN_BASE_URL, self.id, hash)
            }
            _ => {
                let index = self.id.parse::<u64>().map(|id| (id >> 22) % 6).unwrap_or(0);
                format!("{}/embed/avatars/{}.png", DISCORD_CDN_BASE_URL, index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_from_hash() {
        let user: DiscordUser = serde_json::from_str(r#"{"id":"42","avatar":"abc"}"#).unwrap();

        assert_eq!(
            user.profile_picture_url(),
            "https://cdn.discordapp.com/avatars/42/abc.png"
        );
    }

    #[test]
    fn test_default_avatar_when_hash_missing() {
        let user: DiscordUser =
            serde_json::from_str(r#"{"id":"80351110224678912","username":"nelly","avatar":null}"#)
                .unwrap();
        let expected = (80351110224678912u64 >> 22) % 6;

        assert_eq!(
            user.profile_picture_url(),
            format!("https://cdn.discordapp.com/embed/avatars/{}.png", expected)
        );
    }

    #[test]
    fn test_token_response_without_access_token() {
        let response: DiscordTokenResponse = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Invalid \"code\" in request."}"#,
        )
        .unwrap();

        assert!(response.access_token.is_none());
        assert_eq!(response.error.as_deref(), Some("invalid_grant"));
    }
}
