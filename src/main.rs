//! 태스크 매니저 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 데이터베이스 스키마를 준비하고 초기 데이터를 적재한 뒤 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use task_manager_backend::caching::redis::RedisClient;
use task_manager_backend::config::{AppSettings, CacheConfig, CorsConfig, RateLimitConfig, ServerConfig};
use task_manager_backend::core::errors::AppError;
use task_manager_backend::core::registry::ServiceLocator;
use task_manager_backend::db::Database;
use task_manager_backend::routes::configure_app;
use task_manager_backend::services::DataInitializer;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 태스크 매니저 서비스 시작중...");

    let locator = Arc::new(ServiceLocator::new());

    // 데이터 스토어 초기화
    let database = initialize_database().await.map_err(to_io_error)?;
    locator.set(database);

    if let Some(redis_client) = initialize_cache().await {
        locator.set(redis_client);
    }

    let settings = AppSettings::from_env();
    info!(
        "⚙️ 환경: {}, JWT 알고리즘: {}",
        settings.environment.as_str(),
        settings.jwt.signing.algorithm_name()
    );
    locator.set(Arc::new(settings));

    // 모든 서비스 초기화
    locator.initialize_all().map_err(to_io_error)?;
    locator
        .get::<DataInitializer>()
        .map_err(to_io_error)?
        .run()
        .await
        .map_err(to_io_error)?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(locator).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(locator: Arc<ServiceLocator>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/v3/api-docs", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_app(locator.clone()))
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - `.env.dev` (기본값)
/// * `PROFILE=prod` - `.env.prod`
/// * 기타 - `.env`
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 표준 에러로 출력
    match loaded {
        Ok(file) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (설정 파일 로드 실패: {})", profile, e),
    }
}

/// `RUST_LOG`가 없으면 `info,actix_web=info,sqlx=warn`
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info,sqlx=warn"));
}

/// 데이터베이스에 연결하고 스키마를 준비합니다
async fn initialize_database() -> Result<Arc<Database>, AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await?;
    database.migrate().await?;

    Ok(Arc::new(database))
}

/// `REDIS_URL`이 설정된 경우에만 Redis에 연결합니다
///
/// 연결에 실패하면 캐시 없이 계속 진행합니다.
async fn initialize_cache() -> Option<Arc<RedisClient>> {
    let Some(redis_url) = CacheConfig::redis_url() else {
        info!("ℹ️ REDIS_URL 미설정: 캐시 비활성화");
        return None;
    };

    match RedisClient::connect(&redis_url).await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("⚠️ Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
            None
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-total-count")])
        .supports_credentials()
        .max_age(3600)
}

fn to_io_error(e: AppError) -> io::Error {
    error!("❌ 초기화 실패: {}", e);
    io::Error::other(e.to_string())
}
