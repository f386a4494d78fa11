//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 사용자 목록 | 200 OK + `X-Total-Count` |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK |
//! | `POST` | `/api/users` | 회원 가입 | 201 Created |
//! | `PUT` | `/api/users/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 삭제 | 204 No Content |
//!
//! 모든 엔드포인트는 인증 없이 호출할 수 있으며, 토큰이 있으면 요청자를 로그에 남깁니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::Inject;
use crate::domain::dto::users::{UserCreateRequest, UserResponse, UserUpdateRequest};
use crate::domain::models::auth::OptionalUser;
use crate::handlers::{list_response, validate};
use crate::services::users::UserService;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses((status = 200, description = "사용자 목록", body = Vec<UserResponse>,
        headers(("X-Total-Count" = i64, description = "전체 개수"))))
)]
#[get("")]
pub async fn index(users: Inject<UserService>) -> Result<HttpResponse, AppError> {
    Ok(list_response(users.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "사용자 id")),
    responses(
        (status = 200, description = "사용자", body = UserResponse),
        (status = 404, description = "없음")
    )
)]
#[get("/{id}")]
pub async fn show(id: web::Path<i64>, users: Inject<UserService>) -> Result<HttpResponse, AppError> {
    let user = users.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserCreateRequest,
    responses(
        (status = 201, description = "생성됨", body = UserResponse),
        (status = 400, description = "검증 실패"),
        (status = 409, description = "이메일 중복")
    )
)]
#[post("")]
pub async fn create(
    payload: web::Json<UserCreateRequest>,
    users: Inject<UserService>,
    actor: OptionalUser,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let user = users.create(payload.into_inner()).await?;
    log::info!("사용자 등록 by {}: id {}", actor.actor(), user.id);

    Ok(HttpResponse::Created().json(user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "사용자 id")),
    request_body = UserUpdateRequest,
    responses(
        (status = 200, description = "수정됨", body = UserResponse),
        (status = 400, description = "검증 실패"),
        (status = 404, description = "없음"),
        (status = 409, description = "이메일 중복")
    )
)]
#[put("/{id}")]
pub async fn update(
    id: web::Path<i64>,
    payload: web::Json<UserUpdateRequest>,
    users: Inject<UserService>,
    actor: OptionalUser,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let id = id.into_inner();
    let user = users.update(id, payload.into_inner()).await?;
    log::info!("사용자 수정 by {}: id {}", actor.actor(), id);

    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "사용자 id")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 400, description = "담당 태스크 존재"),
        (status = 404, description = "없음")
    )
)]
#[delete("/{id}")]
pub async fn destroy(
    id: web::Path<i64>,
    users: Inject<UserService>,
    actor: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    users.delete(id).await?;
    log::info!("사용자 삭제 by {}: id {}", actor.actor(), id);

    Ok(HttpResponse::NoContent().finish())
}
