//! # HTTP Handlers
//!
//! 리소스별 핸들러 모듈과 공통 응답/추출기 설정입니다.
//! 핸들러는 [`Inject<T>`](crate::core::Inject)로 서비스를 주입받고 `AppError`를 `?`로 전파합니다.
//!
//! | 모듈 | 경로 | 인증 |
//! |------|------|------|
//! | [`welcome`] | `/welcome`, `/health` | 없음 |
//! | [`auth`] | `/api/login`, `/.well-known/jwks.json` | 없음 |
//! | [`users`] | `/api/users` | 선택 |
//! | [`task_statuses`] | `/api/task_statuses` | 필수 |
//! | [`labels`] | `/api/labels` | 필수 |
//! | [`tasks`] | `/api/tasks` | 필수 |

pub mod welcome;
pub mod auth;
pub mod users;
pub mod task_statuses;
pub mod labels;
pub mod tasks;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};

/// 목록 응답의 전체 개수 헤더
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// 잘못된 JSON 본문과 타입 불일치를 400 `ValidationError`로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 오류: {}", err);
        AppError::ValidationError(format!("잘못된 요청 본문: {}", err)).into()
    })
}

/// 잘못된 쿼리 문자열을 400 `ValidationError`로 변환합니다.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터: {}", err)).into()
    })
}

/// `validator` 검증 결과를 `AppError`로 변환합니다.
pub fn validate<T: Validate>(payload: &T) -> AppResult<()> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

/// JSON 배열과 `X-Total-Count` 헤더
pub fn list_response<T: Serialize>(items: Vec<T>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((TOTAL_COUNT_HEADER, items.len().to_string()))
        .json(items)
}
