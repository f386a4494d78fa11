//! 런타임에 한 번 확정되는 애플리케이션 설정
//!
//! `JwtConfig::secret()` 같은 정적 설정은 호출할 때마다 환경 변수를 읽습니다.
//! 서비스가 의존하는 값은 시작 시 [`AppSettings`]로 확정하여 `ServiceLocator`에
//! 등록하고, 테스트는 [`AppSettings::for_environment`]로 환경 변수와 무관한 값을 주입합니다.

use crate::config::{CacheConfig, Environment, JwtConfig, PasswordConfig, SeedConfig, SigningKeyConfig};

#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub issuer: String,
    pub expiration_hours: i64,
    pub signing: SigningKeyConfig,
}

#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub environment: Environment,
    pub bcrypt_cost: u32,
    pub cache_ttl_seconds: u64,
    pub jwt: JwtSettings,
    pub admin: AdminAccount,
}

impl AppSettings {
    /// 환경 변수에서 전체 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            cache_ttl_seconds: CacheConfig::ttl_seconds(),
            jwt: JwtSettings {
                issuer: JwtConfig::issuer(),
                expiration_hours: JwtConfig::expiration_hours(),
                signing: JwtConfig::signing_keys(),
            },
            admin: AdminAccount {
                email: SeedConfig::admin_email(),
                password: SeedConfig::admin_password(),
                first_name: SeedConfig::admin_first_name(),
                last_name: SeedConfig::admin_last_name(),
            },
        }
    }

    /// 환경 변수를 읽지 않는 환경별 기본 설정 (HS256, 기본 관리자 계정)
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            bcrypt_cost: PasswordConfig::bcrypt_cost_for_env(environment),
            cache_ttl_seconds: 600,
            jwt: JwtSettings {
                issuer: JwtConfig::DEFAULT_ISSUER.to_string(),
                expiration_hours: 24,
                signing: SigningKeyConfig::Hmac {
                    secret: format!("{}-task-manager-secret", environment.as_str()),
                },
            },
            admin: AdminAccount {
                email: "hexlet@example.com".to_string(),
                password: "qwerty".to_string(),
                first_name: "tirion".to_string(),
                last_name: "lannister".to_string(),
            },
        }
    }
}
