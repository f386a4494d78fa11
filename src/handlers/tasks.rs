//! 태스크 핸들러
//!
//! `GET /api/tasks`는 `titleCont`, `assigneeId`, `status`, `labelId` 필터를 AND로 결합합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::Inject;
use crate::domain::dto::tasks::{TaskCreateRequest, TaskFilterParams, TaskResponse, TaskUpdateRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::{list_response, validate};
use crate::services::tasks::TaskService;

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(TaskFilterParams),
    responses(
        (status = 200, description = "태스크 목록", body = Vec<TaskResponse>,
            headers(("X-Total-Count" = i64, description = "전체 개수"))),
        (status = 400, description = "잘못된 필터"),
        (status = 401, description = "인증 필요")
    )
)]
#[get("")]
pub async fn index(
    filter: web::Query<TaskFilterParams>,
    tasks: Inject<TaskService>,
) -> Result<HttpResponse, AppError> {
    let tasks = tasks.find_all(filter.into_inner().into()).await?;
    Ok(list_response(tasks))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "태스크 id")),
    responses(
        (status = 200, description = "태스크", body = TaskResponse),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[get("/{id}")]
pub async fn show(id: web::Path<i64>, tasks: Inject<TaskService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(tasks.find_by_id(id.into_inner()).await?))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "tasks",
    security(("bearer_auth" = [])),
    request_body = TaskCreateRequest,
    responses(
        (status = 201, description = "생성됨", body = TaskResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "상태/담당자/라벨 없음")
    )
)]
#[post("")]
pub async fn create(
    payload: web::Json<TaskCreateRequest>,
    tasks: Inject<TaskService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let task = tasks.create(payload.into_inner()).await?;
    log::info!("태스크 생성 by {}: id {}", user.email, task.id);

    Ok(HttpResponse::Created().json(task))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "태스크 id")),
    request_body = TaskUpdateRequest,
    responses(
        (status = 200, description = "수정됨", body = TaskResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[put("/{id}")]
pub async fn update(
    id: web::Path<i64>,
    payload: web::Json<TaskUpdateRequest>,
    tasks: Inject<TaskService>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let task = tasks.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "tasks",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "태스크 id")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[delete("/{id}")]
pub async fn destroy(
    id: web::Path<i64>,
    tasks: Inject<TaskService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    tasks.delete(id).await?;
    log::info!("태스크 삭제 by {}: id {}", user.email, id);

    Ok(HttpResponse::NoContent().finish())
}
