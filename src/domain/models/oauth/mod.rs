//! # OAuth 프로바이더 모델
//!
//! 각 프로바이더의 토큰 교환 응답과 프로필 API 응답 모델입니다.
//! 서비스 계층은 이 모델을 받아 공통 [`Identity`](crate::domain::models::Identity)로 변환합니다.
//!
//! | 프로바이더 | 모듈 | 토큰 교환 | 프로필 |
//! |-----------|------|-----------|--------|
//! | GitHub | [`github_oauth_model`] | `login/oauth/access_token` | `/user`, `/user/emails` |
//! | Discord | [`discord_oauth_model`] | `oauth2/token` | `/users/@me` |

pub mod github_oauth_model;
pub mod discord_oauth_model;
