//! JWT 클레임과 JWKS 응답 모델
//!
//! RFC 7519 표준 클레임에 사용자 id(`uid`)를 더한 최소 구성입니다.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (로그인 이메일)
/// - `uid`: 사용자 id
/// - `iss`: 발급자 (`JWT_ISSUER`, 기본 `self`)
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
/// - `jti`: 토큰 고유 id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub uid: i64,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// JWK 단일 키 (RFC 7517)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Jwk {
    pub kty: String,
    #[serde(rename = "use")]
    pub use_: String,
    pub alg: String,
    pub kid: String,
    pub n: String,
    pub e: String,
}

/// `/.well-known/jwks.json` 응답
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}
