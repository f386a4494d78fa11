//! OpenAPI 문서
//!
//! 핸들러의 `#[utoipa::path]` 선언을 모아 `GET /v3/api-docs`로 JSON 문서를 제공합니다.

use actix_web::{get, HttpResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::dto::labels::{LabelCreateRequest, LabelResponse, LabelUpdateRequest};
use crate::domain::dto::task_statuses::{
    TaskStatusCreateRequest, TaskStatusResponse, TaskStatusUpdateRequest,
};
use crate::domain::dto::tasks::{TaskCreateRequest, TaskResponse, TaskUpdateRequest};
use crate::domain::dto::users::{LoginRequest, UserCreateRequest, UserResponse, UserUpdateRequest};
use crate::domain::models::token::{Jwk, JwkSet};
use crate::handlers;

pub const BEARER_SCHEME: &str = "bearer_auth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Manager API",
        description = "사용자, 태스크 상태, 라벨, 태스크 관리 REST API"
    ),
    paths(
        handlers::welcome::welcome,
        handlers::welcome::health_check,
        handlers::auth::login,
        handlers::auth::jwks,
        handlers::users::index,
        handlers::users::show,
        handlers::users::create,
        handlers::users::update,
        handlers::users::destroy,
        handlers::task_statuses::index,
        handlers::task_statuses::show,
        handlers::task_statuses::create,
        handlers::task_statuses::update,
        handlers::task_statuses::destroy,
        handlers::labels::index,
        handlers::labels::show,
        handlers::labels::create,
        handlers::labels::update,
        handlers::labels::destroy,
        handlers::tasks::index,
        handlers::tasks::show,
        handlers::tasks::create,
        handlers::tasks::update,
        handlers::tasks::destroy,
    ),
    components(schemas(
        LoginRequest,
        UserCreateRequest,
        UserUpdateRequest,
        UserResponse,
        TaskStatusCreateRequest,
        TaskStatusUpdateRequest,
        TaskStatusResponse,
        LabelCreateRequest,
        LabelUpdateRequest,
        LabelResponse,
        TaskCreateRequest,
        TaskUpdateRequest,
        TaskResponse,
        JwkSet,
        Jwk,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "welcome", description = "환영 메시지와 헬스 체크"),
        (name = "auth", description = "로그인과 공개키"),
        (name = "users", description = "사용자 관리"),
        (name = "task_statuses", description = "태스크 상태 관리"),
        (name = "labels", description = "라벨 관리"),
        (name = "tasks", description = "태스크 관리")
    )
)]
pub struct ApiDoc;

/// `Authorization: Bearer <JWT>` 보안 스키마 등록
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[get("/v3/api-docs")]
pub async fn api_docs() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
