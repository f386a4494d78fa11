//! 라벨 핸들러. 모든 엔드포인트는 인증이 필요합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::core::registry::Inject;
use crate::domain::dto::labels::{LabelCreateRequest, LabelResponse, LabelUpdateRequest};
use crate::handlers::{list_response, validate};
use crate::services::labels::LabelService;

#[utoipa::path(
    get,
    path = "/api/labels",
    tag = "labels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "라벨 목록", body = Vec<LabelResponse>,
            headers(("X-Total-Count" = i64, description = "전체 개수"))),
        (status = 401, description = "인증 필요")
    )
)]
#[get("")]
pub async fn index(service: Inject<LabelService>) -> Result<HttpResponse, AppError> {
    Ok(list_response(service.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/labels/{id}",
    tag = "labels",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "라벨 id")),
    responses(
        (status = 200, description = "라벨", body = LabelResponse),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[get("/{id}")]
pub async fn show(id: web::Path<i64>, service: Inject<LabelService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.find_by_id(id.into_inner()).await?))
}

#[utoipa::path(
    post,
    path = "/api/labels",
    tag = "labels",
    security(("bearer_auth" = [])),
    request_body = LabelCreateRequest,
    responses(
        (status = 201, description = "생성됨", body = LabelResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 409, description = "중복")
    )
)]
#[post("")]
pub async fn create(payload: web::Json<LabelCreateRequest>, service: Inject<LabelService>) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let created = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    put,
    path = "/api/labels/{id}",
    tag = "labels",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "라벨 id")),
    request_body = LabelUpdateRequest,
    responses(
        (status = 200, description = "수정됨", body = LabelResponse),
        (status = 400, description = "검증 실패"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음"),
        (status = 409, description = "중복")
    )
)]
#[put("/{id}")]
pub async fn update(
    id: web::Path<i64>,
    payload: web::Json<LabelUpdateRequest>,
    service: Inject<LabelService>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/labels/{id}",
    tag = "labels",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "라벨 id")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 400, description = "태스크에서 사용 중"),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "없음")
    )
)]
#[delete("/{id}")]
pub async fn destroy(id: web::Path<i64>, service: Inject<LabelService>) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
