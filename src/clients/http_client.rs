//! # 외부 HTTP 호출 추상화
//!
//! 프로바이더 어댑터는 reqwest 를 직접 사용하지 않고 [`HttpClient`] trait 을 통해
//! 요청을 보냅니다. 운영 환경에서는 [`ReqwestHttpClient`], 테스트에서는 기록용 stub 을 주입합니다.
//!
//! ## 에러 규칙
//!
//! - 2xx 가 아닌 응답도 **정상 응답**으로 돌려줍니다. 상태 코드 해석은 호출자 몫입니다.
//! - 연결 실패, 타임아웃, 본문 읽기 실패만 [`HttpClientError`] 입니다.
//!
//! ```rust,ignore
//! let request = HttpRequest::post_form(token_url, &[("code", code)])
//!     .basic_auth(&client_id, &client_secret)
//!     .accept_json();
//! let response = http.execute(request).await?;
//! if response.is_success() {
//!     let token: DiscordTokenResponse = response.json()?;
//! }
//! ```

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// 지원하는 HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// 프로바이더로 보낼 HTTP 요청
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `application/x-www-form-urlencoded` 본문을 가진 POST 요청
    pub fn post_form(url: impl Into<String>, params: &[(&str, &str)]) -> Self {
        let body = params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body: Some(body),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let credentials = STANDARD.encode(format!("{}:{}", username, password));
        self.header("Authorization", format!("Basic {}", credentials))
    }

    pub fn accept_json(self) -> Self {
        self.header("Accept", "application/json")
    }

    /// 이름이 일치하는 첫 번째 헤더 값 (대소문자 무시)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// 프로바이더 응답 (상태 코드와 원문 본문)
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// 전송 계층 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpClientError {
    #[error("요청 전송 실패: {0}")]
    Transport(String),

    #[error("응답 본문 읽기 실패: {0}")]
    Body(String),
}

/// 외부 HTTP 호출 capability
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError>;
}

/// reqwest 기반 기본 구현
///
/// 내부 `reqwest::Client`는 커넥션 풀을 공유하므로 프로세스당 하나만 만들어 `Arc`로 나눠 씁니다.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HttpClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HttpClientError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! 테스트용 HTTP 클라이언트. URL 별로 준비된 응답을 돌려주고 보낸 요청을 기록합니다.
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct StubHttpClient {
        responses: HashMap<String, Result<HttpResponse, HttpClientError>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl StubHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses
                .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
            self
        }

        pub fn fail(mut self, url: &str, error: HttpClientError) -> Self {
            self.responses.insert(url.to_string(), Err(error));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests().into_iter().map(|r| r.url).collect()
        }
    }

    #[async_trait]
    impl HttpClient for StubHttpClient {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
            let url = request.url.clone();
            self.requests.lock().unwrap().push(request);

            self.responses
                .get(&url)
                .cloned()
                .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
        }
    }
}
