//! API 라우트 설정 모듈
//!
//! 리소스별로 스코프를 나누고 인증 수준에 맞는 [`AuthMiddleware`]를 적용합니다.
//!
//! ```text
//! /welcome, /health, /v3/api-docs, /.well-known/jwks.json   공개
//! /api/login                                                공개
//! /api/users                                                선택 인증
//! /api/task_statuses, /api/labels, /api/tasks               필수 인증
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let app = App::new().configure(configure_app(locator));
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::core::registry::ServiceLocator;
use crate::docs;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::welcome::welcome)
        .service(handlers::welcome::health_check)
        .service(docs::api_docs)
        .service(handlers::auth::jwks);

    cfg.service(
        web::scope("/api")
            .service(handlers::auth::login)
            .configure(configure_user_routes)
            .configure(configure_task_status_routes)
            .configure(configure_label_routes)
            .configure(configure_task_routes),
    );
}

/// 사용자 라우트
///
/// 회원 가입을 포함하므로 토큰 없이 접근할 수 있습니다.
/// 토큰이 있으면 검증 후 요청 주체를 로그에 남깁니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .wrap(AuthMiddleware::optional())
            .service(handlers::users::index)
            .service(handlers::users::show)
            .service(handlers::users::create)
            .service(handlers::users::update)
            .service(handlers::users::destroy),
    );
}

fn configure_task_status_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/task_statuses")
            .wrap(AuthMiddleware::required())
            .service(handlers::task_statuses::index)
            .service(handlers::task_statuses::show)
            .service(handlers::task_statuses::create)
            .service(handlers::task_statuses::update)
            .service(handlers::task_statuses::destroy),
    );
}

fn configure_label_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/labels")
            .wrap(AuthMiddleware::required())
            .service(handlers::labels::index)
            .service(handlers::labels::show)
            .service(handlers::labels::create)
            .service(handlers::labels::update)
            .service(handlers::labels::destroy),
    );
}

fn configure_task_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .wrap(AuthMiddleware::required())
            .service(handlers::tasks::index)
            .service(handlers::tasks::show)
            .service(handlers::tasks::create)
            .service(handlers::tasks::update)
            .service(handlers::tasks::destroy),
    );
}

/// 레지스트리와 추출기 설정, 라우트를 등록하는 설정 함수
///
/// 서버 전용 미들웨어(Rate Limit, CORS, 접근 로그)는 `main`에서 `App`에 직접 씌웁니다.
/// 통합 테스트는 `App::new().configure(configure_app(locator))`로 앱을 구성합니다.
pub fn configure_app(locator: Arc<ServiceLocator>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(locator))
            .app_data(handlers::json_config())
            .app_data(handlers::query_config());

        configure_all_routes(cfg);
    }
}
