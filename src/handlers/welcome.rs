//! 인증 없이 접근 가능한 상태 확인 엔드포인트

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::registry::Inject;
use crate::db::Database;

pub const WELCOME_MESSAGE: &str = "Welcome to Spring";

#[utoipa::path(
    get,
    path = "/welcome",
    tag = "welcome",
    responses((status = 200, description = "환영 메시지", body = String, content_type = "text/plain"))
)]
#[get("/welcome")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

/// 데이터베이스 `SELECT 1`을 포함한 헬스 체크. 실패 시 503
#[utoipa::path(
    get,
    path = "/health",
    tag = "welcome",
    responses(
        (status = 200, description = "정상"),
        (status = 503, description = "데이터베이스 연결 불가")
    )
)]
#[get("/health")]
pub async fn health_check(database: Inject<Database>) -> Result<HttpResponse, AppError> {
    let (status, database_status) = match database.ping().await {
        Ok(()) => ("healthy", "up".to_string()),
        Err(e) => {
            log::error!("🔥 헬스 체크 실패: {}", e);
            ("unhealthy", format!("down: {}", e))
        }
    };

    let body = json!({
        "status": status,
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": {
            "backend": format!("{:?}", database.backend()),
            "status": database_status,
        }
    });

    if status == "healthy" {
        Ok(HttpResponse::Ok().json(body))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(body))
    }
}
