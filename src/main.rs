//! Photon 인증 서비스 메인 애플리케이션
//!
//! 설정을 읽어 프로바이더 어댑터와 토큰 서비스를 조립하고,
//! Actix-web 기반 HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use photon_auth::clients::{HttpClient, ReqwestHttpClient};
use photon_auth::config::{
    ConfigSource, DiscordOAuthConfig, GitHubOAuthConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
use photon_auth::errors::AppResult;
use photon_auth::routes::configure_all_routes;
use photon_auth::services::auth::{AuthService, SystemClock, TokenService};
use photon_auth::services::oauth::{DiscordAuthService, GitHubAuthService, IdentityProvider};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Photon 인증 서비스 시작중...");

    let source = ConfigSource::from_process().expect("설정 로드 실패");

    let auth_service = web::Data::new(build_auth_service(&source).expect("서비스 초기화 실패"));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(&source, auth_service).await
}

/// 설정으로부터 프로바이더 어댑터와 토큰 서비스를 조립합니다
///
/// 필수 설정(`Jwt:*`, `Github:*`, `Discord:*`)이 하나라도 없으면 `ConfigError`를 반환합니다.
fn build_auth_service(source: &ConfigSource) -> AppResult<AuthService> {
    let jwt_config = JwtConfig::from_source(source)?;
    let github_config = GitHubOAuthConfig::from_source(source)?;
    let discord_config = DiscordOAuthConfig::from_source(source)?;

    info!("JWT 설정: {:?}", jwt_config);
    info!("GitHub 설정: {:?}", github_config);
    info!("Discord 설정: {:?}", discord_config);

    // 커넥션 풀은 모든 어댑터가 공유
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());

    let providers: Vec<Arc<dyn IdentityProvider>> = vec![
        Arc::new(GitHubAuthService::new(github_config, http.clone())),
        Arc::new(DiscordAuthService::new(discord_config, http)),
    ];

    let token_service = TokenService::new(jwt_config, Arc::new(SystemClock));

    Ok(AuthService::new(token_service, providers))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    source: &ConfigSource,
    auth_service: web::Data<AuthService>,
) -> std::io::Result<()> {
    let server_config = ServerConfig::from_source(source);
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: http://{}/auth/login/{{github|discord}}?code=", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_source(source);
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 오류");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(auth_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address.as_str())?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 비밀 값은 `SECRETS_FILE`(기본값 `secrets.json`)에 둘 수도 있으며,
/// 같은 키가 양쪽에 있으면 환경변수가 우선합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=photon_auth::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로그인 화면을 띄우는 프론트엔드 개발 서버와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 모든 엔드포인트가 GET
        .allowed_methods(vec!["GET", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
