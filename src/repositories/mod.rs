//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 애그리게이트마다 하나의 리포지토리가 있으며, `register_repository!`로
//! `ServiceLocator`에 등록되어 첫 조회 시 생성됩니다.
//! SQL은 `$n` 플레이스홀더로 작성하여 SQLite와 PostgreSQL 양쪽에서 동작합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = locator.get::<UserRepository>()?;
//! let user = user_repo.find_by_email("hexlet@example.com").await?;
//! ```

pub mod users;
pub mod task_statuses;
pub mod labels;
pub mod tasks;

pub use users::UserRepository;
pub use task_statuses::TaskStatusRepository;
pub use labels::LabelRepository;
pub use tasks::TaskRepository;

use crate::core::errors::AppError;

/// sqlx 에러를 `AppError`로 변환합니다. 유니크 제약 위반은 409로 매핑합니다.
pub(crate) fn db_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::ConflictError(db_err.message().to_string())
        }
        _ => AppError::DatabaseError(e.to_string()),
    }
}

/// `$start, $start+1, ...` 형태의 IN 절 플레이스홀더 목록
pub(crate) fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
