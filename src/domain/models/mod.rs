//! # Domain Models Module
//!
//! 데이터베이스에 저장되지 않는 값 객체입니다.
//!
//! - [`auth`]: 인증 미들웨어가 요청 확장에 넣는 [`AuthenticatedUser`](auth::AuthenticatedUser)와 인증 모드
//! - [`token`]: JWT 페이로드 [`TokenClaims`](token::TokenClaims)와 JWKS 응답 모델

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
