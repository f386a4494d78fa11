//! 데이터 계층 및 서버 런타임 설정
//!
//! 모든 설정은 환경 변수에서 읽으며, 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
//! `.env.dev` / `.env.prod` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! | 환경 변수 | 기본값 | 설명 |
//! |-----------|--------|------|
//! | `ENVIRONMENT` | `production` | 실행 환경 |
//! | `BCRYPT_COST` | 환경별 | 4~15 |
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` | 바인딩 주소 |
//! | `SERVER_WORKERS` | `4` | actix 워커 수 |
//! | `DATABASE_URL` | `sqlite::memory:` | `sqlite:` 또는 `postgres:` |
//! | `DATABASE_MAX_CONNECTIONS` | `10` | 풀 크기 |
//! | `REDIS_URL` | 없음 | 설정 시 캐시 활성화 |
//! | `CACHE_TTL_SECONDS` | `600` | 캐시 만료 |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` | 요청 제한 |
//! | `CORS_ALLOWED_ORIGINS` | 로컬 프론트엔드 | 콤마 구분 |

use std::env;
use std::str::FromStr;

/// 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 환경 변수를 파싱하고 실패 시 기본값을 사용합니다.
fn env_or<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost (`BCRYPT_COST` 우선, 범위 밖이면 환경별 기본값)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(Environment::current())
    }

    /// 환경별 bcrypt cost
    ///
    /// 개발/테스트는 빠른 피드백을 위해 최소값 4를 사용합니다.
    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 관계형 데이터베이스 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub const IN_MEMORY_URL: &'static str = "sqlite::memory:";

    pub fn url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| Self::IN_MEMORY_URL.to_string())
    }

    pub fn max_connections() -> u32 {
        env_or("DATABASE_MAX_CONNECTIONS", 10)
    }
}

/// Redis 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    /// `REDIS_URL`이 없으면 캐시를 사용하지 않습니다.
    pub fn redis_url() -> Option<String> {
        env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())
    }

    pub fn ttl_seconds() -> u64 {
        env_or("CACHE_TTL_SECONDS", 600)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("DEV"), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_as_str_roundtrip() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(Environment::parse(env.as_str()), env);
        }
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_database_url_default_is_in_memory() {
        if env::var("DATABASE_URL").is_err() {
            assert_eq!(DatabaseConfig::url(), "sqlite::memory:");
        }
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = CorsConfig::parse_origins(" https://a.example.com, ,https://b.example.com ");
        assert_eq!(origins, vec!["https://a.example.com", "https://b.example.com"]);
    }
}
