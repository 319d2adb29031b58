//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//!
//! ```text
//! dto/
//! └── auth/
//!     ├── request.rs   - LoginQuery, ValidateTokenQuery
//!     └── response.rs  - LoginResponse
//! ```

pub mod auth;

pub use auth::*;
