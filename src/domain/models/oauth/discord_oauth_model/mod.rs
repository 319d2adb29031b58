//! Discord OAuth2 모델

pub mod discord_user;

pub use discord_user::*;
