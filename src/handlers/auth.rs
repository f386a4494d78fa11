//! Authentication HTTP Handlers
//!
//! - `POST /api/login`: 이메일/비밀번호로 로그인하고 JWT를 `text/plain`으로 반환
//! - `GET /.well-known/jwks.json`: RS256 공개키 (HS256이면 404)

use actix_web::{get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::Inject;
use crate::domain::dto::users::LoginRequest;
use crate::domain::models::token::JwkSet;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 로그인
///
/// 본문이 잘못되었거나 자격 증명이 틀린 경우 모두 401 입니다.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "JWT 토큰", body = String, content_type = "text/plain"),
        (status = 401, description = "인증 실패")
    )
)]
#[post("/login")]
pub async fn login(
    body: web::Bytes,
    users: Inject<UserService>,
    tokens: Inject<TokenService>,
) -> Result<HttpResponse, AppError> {
    let credentials: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        log::debug!("로그인 요청 본문 오류: {}", e);
        AppError::AuthenticationError("잘못된 로그인 요청입니다".to_string())
    })?;

    let user = users
        .verify_password(&credentials.username, &credentials.password)
        .await?;
    let token = tokens.issue_token(&user)?;

    log::info!("🔓 로그인 성공: {} (id {})", user.email, user.id);

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(token))
}

#[utoipa::path(
    get,
    path = "/.well-known/jwks.json",
    tag = "auth",
    responses(
        (status = 200, description = "JWKS", body = JwkSet),
        (status = 404, description = "HS256 사용 중")
    )
)]
#[get("/.well-known/jwks.json")]
pub async fn jwks(tokens: Inject<TokenService>) -> Result<HttpResponse, AppError> {
    let jwks = tokens
        .jwks()
        .ok_or_else(|| AppError::NotFound("JWKS is only available with RS256 signing".to_string()))?;

    Ok(HttpResponse::Ok().json(jwks))
}
