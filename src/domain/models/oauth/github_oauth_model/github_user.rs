//! # GitHub OAuth 응답 모델
//!
//! GitHub OAuth App 토큰 교환과 REST API(`/user`, `/user/emails`) 응답을
//! 역직렬화하기 위한 데이터 모델입니다.
//!
//! ## API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 필요 스코프 |
//! |------|-----------|-------------|
//! | 토큰 교환 | `POST https://github.com/login/oauth/access_token` | - |
//! | 프로필 | `GET https://api.github.com/user` | `read:user` |
//! | 이메일 목록 | `GET https://api.github.com/user/emails` | `user:email` |

use serde::Deserialize;

/// GitHub 토큰 교환 응답
///
/// GitHub은 잘못된 code 에 대해서도 HTTP 200 과 함께 `error` 필드를 돌려주므로
/// 모든 필드를 선택적으로 받고, 에러 여부는 필드로 판단합니다.
///
/// ```json
/// { "error": "bad_verification_code",
///   "error_description": "The code passed is incorrect or expired.",
///   "error_uri": "https://docs.github.com/apps/managing-oauth-apps/troubleshooting-oauth-app-access-token-request-errors/#bad-verification-code" }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct GitHubTokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub error_uri: Option<String>,
}

impl GitHubTokenResponse {
    /// 사용자에게 보여줄 에러 설명 (`<error_description> <error_uri>`)
    ///
    /// 설명이 없으면 에러 코드를 사용합니다.
    pub fn error_message(&self) -> String {
        let description = self
            .error_description
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Invalid code");

        match self.error_uri.as_deref() {
            Some(uri) => format!("{} {}", description, uri),
            None => description.to_string(),
        }
    }
}

/// GitHub 인증 사용자 프로필 (`GET /user`)
#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    /// 로그인 이름 (항상 존재)
    pub login: String,

    /// 표시 이름 (설정하지 않은 사용자는 `null`)
    pub name: Option<String>,

    /// 아바타 이미지 URL
    pub avatar_url: String,
}

/// GitHub 이메일 항목 (`GET /user/emails`)
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEmail {
    pub email: String,
    pub primary: bool,
    #[serde(default)]
    pub verified: bool,
    pub visibility: Option<String>,
}

/// 이메일 목록에서 primary 로 표시된 항목을 찾습니다.
pub fn find_primary_email(emails: &[GitHubEmail]) -> Option<&GitHubEmail> {
    emails.iter().find(|email| email.primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_joins_description_and_uri() {
        let response: GitHubTokenResponse = serde_json::from_str(
            r#"{"error":"bad_verification_code","error_description":"The code passed is incorrect or expired.","error_uri":"https://docs.github.com/x"}"#,
        )
        .unwrap();

        assert!(response.access_token.is_none());
        assert_eq!(
            response.error_message(),
            "The code passed is incorrect or expired. https://docs.github.com/x"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_error_code() {
        let response = GitHubTokenResponse {
            error: Some("incorrect_client_credentials".to_string()),
            ..Default::default()
        };

        assert_eq!(response.error_message(), "incorrect_client_credentials");
    }

    #[test]
    fn test_find_primary_email() {
        let emails: Vec<GitHubEmail> = serde_json::from_str(
            r#"[{"email":"a@x.com","primary":false,"verified":true,"visibility":null},
                {"email":"b@x.com","primary":true,"verified":true,"visibility":"private"}]"#,
        )
        .unwrap();

        assert_eq!(find_primary_email(&emails).map(|e| e.email.as_str()), Some("b@x.com"));
        assert!(find_primary_email(&emails[..1]).is_none());
    }
}
