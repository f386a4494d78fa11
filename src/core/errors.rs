//! # Application Error Handling System
//!
//! 태스크 매니저 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! Spring의 `@ControllerAdvice` + `@ExceptionHandler` 조합이 하던 일을
//! `thiserror` 열거형과 `actix_web::ResponseError` 구현 하나로 처리합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 JSON |
//! | `ResourceInUse` | 400 Bad Request | 다른 태스크가 참조 중인 리소스 삭제 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 만료 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 이메일, 중복 슬러그 |
//! | `DatabaseError` | 500 Internal Server Error | SQL 실행 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 모든 에러 응답은 `{"error": "<message>"}` 형태의 JSON 입니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn show(&self, id: i64) -> AppResult<LabelResponse> {
//!     let label = self.label_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("Label with id {} not found", id)))?;
//!
//!     Ok(LabelResponse::from(label))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: sqlx 쿼리 및 커넥션 오류
/// - `RedisError`: Redis 캐시 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `ResourceInUse`: 참조 무결성 위반 (사용 중인 상태/라벨/사용자 삭제)
/// - `ConflictError`: 유니크 제약 위반
/// - `NotFound`: 요청된 리소스가 존재하지 않음
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 인증 실패
/// - `AuthorizationError`: 권한 부족
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// ```rust,ignore
    /// sqlx::query("DELETE FROM labels WHERE id = $1")
    ///     .bind(id)
    ///     .execute(self.db.pool())
    ///     .await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// `validator`의 `ValidationErrors` 메시지나 JSON 역직렬화 실패 메시지를 담습니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 사용 중인 리소스 삭제 시도
    ///
    /// 태스크가 참조하는 상태, 라벨, 담당자를 삭제하려 할 때 발생합니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Resource in use: {0}")]
    ResourceInUse(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// ```rust,ignore
    /// if self.user_repo.find_by_email(&email).await?.is_some() {
    ///     return Err(AppError::ConflictError(
    ///         format!("User with email {} already exists", email)
    ///     ));
    /// }
    /// ```
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// # 발생 시나리오
    /// - 잘못된 로그인 정보
    /// - 만료된 JWT 토큰
    /// - 유효하지 않은 토큰 서명 또는 발급자
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러
    ///
    /// ```rust,ignore
    /// let service = locator.get::<TaskService>()
    ///     .map_err(|e| AppError::InternalError(format!("TaskService 조회 실패: {}", e)))?;
    /// ```
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 변형에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ResourceInUse(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 기록합니다. 클라이언트에는 동일한 JSON 형식으로
    /// 메시지만 전달됩니다.
    ///
    /// ```json
    /// {
    ///   "error": "Not found: Task with id 42 not found"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("🔥 {}", self);
        } else {
            log::debug!("요청 처리 실패 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::{AppError, ErrorContext};
///
/// let pem = std::fs::read_to_string(&path)
///     .with_context(|| format!("개인키 파일 읽기 실패: {}", path))?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
