//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`]: Bearer JWT 검증 후 `AuthenticatedUser`를 요청 확장에 저장
//!
//! ```rust,ignore
//! web::scope("/api/tasks")
//!     .wrap(AuthMiddleware::required())
//!     .service(tasks::index)
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
