//! 인증 및 초기 데이터 설정
//!
//! JWT 서명 방식은 환경 변수로 결정됩니다.
//!
//! - `JWT_PRIVATE_KEY_PATH`가 설정되면 **RS256** (키 파일이 없으면 생성)
//! - 그렇지 않으면 `JWT_SECRET` 기반 **HS256**

use std::env;

/// JWT 서명 키 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningKeyConfig {
    /// 대칭키 (HS256)
    Hmac { secret: String },
    /// RSA 키 파일 (RS256)
    Rsa {
        private_key_path: String,
        public_key_path: String,
    },
}

impl SigningKeyConfig {
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            SigningKeyConfig::Hmac { .. } => "HS256",
            SigningKeyConfig::Rsa { .. } => "RS256",
        }
    }
}

pub struct JwtConfig;

impl JwtConfig {
    pub const DEFAULT_ISSUER: &'static str = "self";

    pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "task-manager-secret-key".to_string()
        })
    }

    pub fn issuer() -> String {
        env::var("JWT_ISSUER").unwrap_or_else(|_| Self::DEFAULT_ISSUER.to_string())
    }

    /// 1시간 ~ 1년 범위로 제한
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse::<i64>()
            .unwrap_or(24)
            .clamp(1, Self::MAX_EXPIRATION_HOURS)
    }

    pub fn signing_keys() -> SigningKeyConfig {
        match env::var("JWT_PRIVATE_KEY_PATH") {
            Ok(private_key_path) => SigningKeyConfig::Rsa {
                public_key_path: env::var("JWT_PUBLIC_KEY_PATH")
                    .unwrap_or_else(|_| Self::default_public_key_path(&private_key_path)),
                private_key_path,
            },
            Err(_) => SigningKeyConfig::Hmac { secret: Self::secret() },
        }
    }

    /// `secrets/jwt_private_key.pem` → `secrets/jwt_public_key.pem`
    fn default_public_key_path(private_key_path: &str) -> String {
        if private_key_path.contains("private") {
            private_key_path.replacen("private", "public", 1)
        } else {
            format!("{}.pub", private_key_path)
        }
    }
}

/// 초기 관리자 계정 설정
pub struct SeedConfig;

impl SeedConfig {
    pub fn admin_email() -> String {
        env::var("ADMIN_EMAIL").unwrap_or_else(|_| "hexlet@example.com".to_string())
    }

    pub fn admin_password() -> String {
        env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "qwerty".to_string())
    }

    pub fn admin_first_name() -> String {
        env::var("ADMIN_FIRST_NAME").unwrap_or_else(|_| "tirion".to_string())
    }

    pub fn admin_last_name() -> String {
        env::var("ADMIN_LAST_NAME").unwrap_or_else(|_| "lannister".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_public_key_path() {
        assert_eq!(
            JwtConfig::default_public_key_path("./secrets/jwt_private_key.pem"),
            "./secrets/jwt_public_key.pem"
        );
        assert_eq!(JwtConfig::default_public_key_path("/etc/app/key.pem"), "/etc/app/key.pem.pub");
    }

    #[test]
    fn test_algorithm_name() {
        let hmac = SigningKeyConfig::Hmac { secret: "s".to_string() };
        let rsa = SigningKeyConfig::Rsa {
            private_key_path: "a".to_string(),
            public_key_path: "b".to_string(),
        };

        assert_eq!(hmac.algorithm_name(), "HS256");
        assert_eq!(rsa.algorithm_name(), "RS256");
    }

    #[test]
    fn test_expiration_hours_stays_in_range() {
        let hours = JwtConfig::expiration_hours();
        assert!((1..=JwtConfig::MAX_EXPIRATION_HOURS).contains(&hours));
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(hours, 24);
        }
    }

    #[test]
    fn test_seed_defaults() {
        if env::var("ADMIN_EMAIL").is_err() {
            assert_eq!(SeedConfig::admin_email(), "hexlet@example.com");
        }
        if env::var("ADMIN_PASSWORD").is_err() {
            assert_eq!(SeedConfig::admin_password(), "qwerty");
        }
    }
}
