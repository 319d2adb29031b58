//! # Configuration Module
//!
//! 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수와 선택적인 `secrets.json` 파일에서 설정값을 읽어
//! 프로세스 전역의 불변 값으로 구성합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 설정 키 조회([`ConfigSource`]), 서버 바인딩, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명 설정, GitHub/Discord OAuth 클라이언트 설정, 프로바이더 판별자
//!
//! ## 설계 원칙
//!
//! ### 1. 한 번 읽고 주입하기
//!
//! 설정은 `main`에서 한 번만 읽어 값으로 만든 뒤 서비스 생성자에 전달합니다.
//! 요청 처리 중에는 환경 변수를 다시 조회하지 않습니다.
//!
//! ### 2. 보안 우선
//!
//! - 민감한 정보는 환경 변수나 시크릿 파일로만 제공
//! - 필수 설정 누락 시 서버가 시작되지 않음
//! - `Debug` 출력에서 비밀값은 가려짐
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ConfigSource, JwtConfig, ServerConfig};
//!
//! let source = ConfigSource::from_process()?;
//! let jwt = JwtConfig::from_source(&source)?;
//! let server = ServerConfig::from_source(&source);
//! println!("Server will bind to {}", server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
