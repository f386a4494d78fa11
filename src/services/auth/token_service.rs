//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 성공 시 액세스 토큰을 발급하고, 인증 미들웨어의 요청마다 서명,
//! 만료 시각, 발급자(`iss`)를 검증합니다.
//!
//! # 서명 방식
//!
//! | 설정 | 알고리즘 | JWKS |
//! |------|----------|------|
//! | `JWT_SECRET` | HS256 | 없음 (404) |
//! | `JWT_PRIVATE_KEY_PATH` | RS256 | 공개키 1개 |
//!
//! RSA 키 파일이 없으면 2048비트 키 쌍을 생성합니다.
//!
//! ```bash
//! # 직접 생성하는 경우
//! openssl genrsa -out jwt_private_key.pem 2048
//! openssl rsa -in jwt_private_key.pem -pubout -out jwt_public_key.pem
//! ```

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use uuid::Uuid;

use crate::config::{AppSettings, JwtSettings, SigningKeyConfig};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::registry::{register_service, Component, ServiceLocator};
use crate::domain::entities::users::User;
use crate::domain::models::token::{Jwk, JwkSet, TokenClaims};

const RSA_KEY_BITS: usize = 2048;
const RSA_KEY_ID: &str = "task-manager-key-1";

pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    key_id: Option<String>,
    jwks: Option<JwkSet>,
    issuer: String,
    expiration_hours: i64,
}

impl Component for TokenService {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        let settings = locator.get::<AppSettings>()?;
        Self::from_settings(&settings.jwt)
    }
}

register_service!(TokenService, "token_service");

impl TokenService {
    /// 서명 키를 준비합니다. RS256이면 키 파일을 읽거나 생성합니다.
    pub fn from_settings(settings: &JwtSettings) -> AppResult<Self> {
        let service = match &settings.signing {
            SigningKeyConfig::Hmac { secret } => Self {
                algorithm: Algorithm::HS256,
                encoding_key: EncodingKey::from_secret(secret.as_bytes()),
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
                key_id: None,
                jwks: None,
                issuer: settings.issuer.clone(),
                expiration_hours: settings.expiration_hours,
            },
            SigningKeyConfig::Rsa {
                private_key_path,
                public_key_path,
            } => {
                let (private_pem, public_pem) = Self::load_or_generate_rsa_keys(private_key_path, public_key_path)?;

                let public_key = RsaPublicKey::from_public_key_pem(&public_pem)
                    .with_context(|| format!("공개키 파싱 실패: {}", public_key_path))?;

                Self {
                    algorithm: Algorithm::RS256,
                    encoding_key: EncodingKey::from_rsa_pem(private_pem.as_bytes())
                        .context("JWT 개인키 로드 실패")?,
                    decoding_key: DecodingKey::from_rsa_pem(public_pem.as_bytes())
                        .context("JWT 공개키 로드 실패")?,
                    key_id: Some(RSA_KEY_ID.to_string()),
                    jwks: Some(Self::build_jwks(&public_key)),
                    issuer: settings.issuer.clone(),
                    expiration_hours: settings.expiration_hours,
                }
            }
        };

        log::info!("🔐 JWT 서명 방식: {:?} (issuer: {})", service.algorithm, service.issuer);
        Ok(service)
    }

    /// 액세스 토큰 발급 (`sub` = 이메일, `uid` = 사용자 id)
    pub fn issue_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::InternalError(format!("토큰 만료 시간이 범위를 벗어났습니다: {}시간", self.expiration_hours))
            })?;

        let claims = TokenClaims {
            sub: user.email.clone(),
            uid: user.id,
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
        };

        let mut header = Header::new(self.algorithm);
        header.kid = self.key_id.clone();

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명, 만료, 발급자를 검증하고 클레임을 반환합니다.
    ///
    /// 모든 검증 실패는 `AuthenticationError`(401) 입니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::AuthenticationError("토큰이 만료되었습니다".to_string()),
                ErrorKind::InvalidIssuer => AppError::AuthenticationError("신뢰할 수 없는 발급자입니다".to_string()),
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }

    /// RS256일 때만 공개키 JWKS를 반환합니다.
    pub fn jwks(&self) -> Option<&JwkSet> {
        self.jwks.as_ref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn build_jwks(public_key: &RsaPublicKey) -> JwkSet {
        let n = general_purpose::URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be());
        let e = general_purpose::URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be());

        JwkSet {
            keys: vec![Jwk {
                kty: "RSA".to_string(),
                use_: "sig".to_string(),
                alg: "RS256".to_string(),
                kid: RSA_KEY_ID.to_string(),
                n,
                e,
            }],
        }
    }

    /// (개인키 PEM, 공개키 PEM)
    fn load_or_generate_rsa_keys(private_key_path: &str, public_key_path: &str) -> AppResult<(String, String)> {
        if !Path::new(private_key_path).exists() || !Path::new(public_key_path).exists() {
            log::info!("🔑 JWT keys not found. Generating new RSA key pair...");
            Self::generate_rsa_keys(private_key_path, public_key_path)?;
            log::info!("✅ JWT RSA keys generated successfully");
        } else {
            log::info!("🔑 Loading existing JWT RSA keys");
        }

        let private_pem = fs::read_to_string(private_key_path)
            .with_context(|| format!("개인키 파일 읽기 실패: {}", private_key_path))?;
        let public_pem = fs::read_to_string(public_key_path)
            .with_context(|| format!("공개키 파일 읽기 실패: {}", public_key_path))?;

        // PKCS#1 형식 확인
        RsaPrivateKey::from_pkcs1_pem(&private_pem)
            .with_context(|| format!("개인키 파싱 실패: {}", private_key_path))?;

        Ok((private_pem, public_pem))
    }

    fn generate_rsa_keys(private_key_path: &str, public_key_path: &str) -> AppResult<()> {
        for path in [private_key_path, public_key_path] {
            if let Some(parent) = Path::new(path).parent() {
                fs::create_dir_all(parent).with_context(|| format!("디렉토리 생성 실패: {}", parent.display()))?;
            }
        }

        let private_key = RsaPrivateKey::new(&mut rsa::rand_core::OsRng, RSA_KEY_BITS).context("RSA 키 생성 실패")?;
        let public_key = private_key.to_public_key();

        // 개인키는 PKCS#1, 공개키는 PKCS#8
        let private_key_pem = private_key
            .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
            .context("개인키 인코딩 실패")?;
        let public_key_pem = public_key
            .to_public_key_pem(rsa::pkcs8::LineEnding::LF)
            .context("공개키 인코딩 실패")?;

        fs::write(private_key_path, private_key_pem.as_bytes()).context("개인키 저장 실패")?;
        fs::write(public_key_path, public_key_pem.as_bytes()).context("공개키 저장 실패")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            fs::set_permissions(private_key_path, fs::Permissions::from_mode(0o600)).context("개인키 권한 설정 실패")?;
            fs::set_permissions(public_key_path, fs::Permissions::from_mode(0o644)).context("공개키 권한 설정 실패")?;
        }

        log::info!("📁 Private key saved: {}", private_key_path);
        log::info!("📁 Public key saved: {}", public_key_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn hmac_service(issuer: &str) -> TokenService {
        TokenService::from_settings(&JwtSettings {
            issuer: issuer.to_string(),
            expiration_hours: 1,
            signing: SigningKeyConfig::Hmac {
                secret: "test-secret".to_string(),
            },
        })
        .unwrap()
    }

    fn user() -> User {
        User {
            id: 5,
            email: "hexlet@example.com".to_string(),
            first_name: None,
            last_name: None,
            password_hash: String::new(),
            created_at: "2024-01-01".to_string(),
            updated_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify_hs256() {
        let service = hmac_service("self");

        let token = service.issue_token(&user()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "hexlet@example.com");
        assert_eq!(claims.uid, 5);
        assert_eq!(claims.iss, "self");
        assert!(claims.exp > claims.iat);
        assert!(claims.jti.is_some());
        assert!(service.jwks().is_none());
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let token = hmac_service("someone-else").issue_token(&user()).unwrap();

        assert!(matches!(
            hmac_service("self").verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = hmac_service("self");
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "hexlet@example.com".to_string(),
            uid: 5,
            iss: "self".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            jti: None,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &service.encoding_key).unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            _ => panic!("Expected expired token error"),
        }
    }

    #[test]
    fn test_garbage_and_tampered_tokens_are_rejected() {
        let service = hmac_service("self");
        let token = service.issue_token(&user()).unwrap();
        let tampered = format!("{}x", token);

        assert!(matches!(service.verify_token("not-a-jwt"), Err(AppError::AuthenticationError(_))));
        assert!(matches!(service.verify_token(&tampered), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = hmac_service("self");

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }

    #[test]
    fn test_rs256_generates_keys_and_publishes_jwks() {
        let dir = std::env::temp_dir().join(format!("task-manager-keys-{}", Uuid::new_v4()));
        let private_key_path = dir.join("jwt_private_key.pem").to_string_lossy().to_string();
        let public_key_path = dir.join("jwt_public_key.pem").to_string_lossy().to_string();

        let mut settings = AppSettings::for_environment(Environment::Test).jwt;
        settings.signing = SigningKeyConfig::Rsa {
            private_key_path: private_key_path.clone(),
            public_key_path,
        };

        let service = TokenService::from_settings(&settings).unwrap();
        let token = service.issue_token(&user()).unwrap();

        assert_eq!(service.algorithm(), Algorithm::RS256);
        assert_eq!(service.verify_token(&token).unwrap().uid, 5);

        let jwks = service.jwks().unwrap();
        assert_eq!(jwks.keys.len(), 1);
        assert_eq!(jwks.keys[0].kty, "RSA");
        assert_eq!(jwks.keys[0].e, "AQAB");

        // 두 번째 생성은 기존 키를 재사용
        let reloaded = TokenService::from_settings(&settings).unwrap();
        assert_eq!(reloaded.verify_token(&token).unwrap().sub, "hexlet@example.com");
        assert!(Path::new(&private_key_path).exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_out_of_range_expiration_is_error() {
        let service = TokenService::from_settings(&JwtSettings {
            issuer: "self".to_string(),
            expiration_hours: i64::MAX,
            signing: SigningKeyConfig::Hmac {
                secret: "test-secret".to_string(),
            },
        })
        .unwrap();

        assert!(matches!(service.issue_token(&user()), Err(AppError::InternalError(_))));
    }
}
