//! 태스크 상태 핸들러
//!
//! 상태는 태스크가 슬러그로 참조합니다. 사용 중인 상태의 삭제는 400 입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::Inject;
use crate::domain::dto::task_statuses::{TaskStatusCreateRequest, TaskStatusResponse, TaskStatusUpdateRequest};
use crate::handlers::{list_response, validate};
use crate::services::task_statuses::TaskStatusService;

#[utoipa::path(
    get,
    path = "/api/task_statuses",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "태스크 상태 목록", body = Vec<TaskStatusResponse>,
            headers(("X-Total-Count" = i64, description = "전체 개수"))),
        (status = 401, description = "인증 필요")
    )
)]
#[get("")]
pub async fn index(service: Inject<TaskStatusService>) -> Result<HttpResponse, AppError> {
    Ok(list_response(service.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/task_statuses/{id}",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "태스크 상태 id")),
    responses(
        (status = 200, description = "태스크 상태", body = TaskStatusResponse),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[get("/{id}")]
pub async fn show(id: web::Path<i64>, service: Inject<TaskStatusService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.find_by_id(id.into_inner()).await?))
}

#[utoipa::path(
    post,
    path = "/api/task_statuses",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    request_body = TaskStatusCreateRequest,
    responses(
        (status = 201, description = "생성됨", body = TaskStatusResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 409, description = "중복")
    )
)]
#[post("")]
pub async fn create(payload: web::Json<TaskStatusCreateRequest>, service: Inject<TaskStatusService>) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let created = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    put,
    path = "/api/task_statuses/{id}",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "태스크 상태 id")),
    request_body = TaskStatusUpdateRequest,
    responses(
        (status = 200, description = "수정됨", body = TaskStatusResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음"),
        (status = 409, description = "중복")
    )
)]
#[put("/{id}")]
pub async fn update(
    id: web::Path<i64>,
    payload: web::Json<TaskStatusUpdateRequest>,
    service: Inject<TaskStatusService>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/task_statuses/{id}",
    tag = "task_statuses",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "태스크 상태 id")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 400, description = "태스크에서 사용 중"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[delete("/{id}")]
pub async fn destroy(id: web::Path<i64>, service: Inject<TaskStatusService>) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
