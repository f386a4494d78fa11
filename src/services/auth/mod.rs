//! 인증 서비스 모듈
//!
//! - HS256: `JWT_SECRET` 대칭키
//! - RS256: `JWT_PRIVATE_KEY_PATH` PEM 키 (없으면 생성), 공개키는 JWKS로 공개
//!
//! ```rust,ignore
//! let token_service = locator.get::<TokenService>()?;
//! let token = token_service.issue_token(&user)?;
//! let claims = token_service.verify_token(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
