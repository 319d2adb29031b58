//! 외부 시스템 클라이언트

pub mod http_client;

pub use http_client::{HttpClient, HttpClientError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
