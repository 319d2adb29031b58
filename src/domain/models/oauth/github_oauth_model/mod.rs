//! GitHub OAuth 모델

pub mod github_user;

pub use github_user::*;
